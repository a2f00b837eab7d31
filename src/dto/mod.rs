pub mod apod_dto;
