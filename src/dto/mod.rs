pub mod car_dto;
