mod dashboard_dto;

pub use dashboard_dto::{
    AdminDashboardDto, BookingStatusCountsDto, CatererDashboardDto, HomeDashboardDto,
};
