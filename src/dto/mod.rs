pub mod api_response;
pub mod dispatch_dto;
pub mod estimate_dto;
pub mod profile_dto;
