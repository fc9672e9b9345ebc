pub mod hoarding_dto;

pub use hoarding_dto::{
    CreateHoardingResponseDto, HoardingFieldsDto, HoardingResponseDto, MessageResponseDto,
};
