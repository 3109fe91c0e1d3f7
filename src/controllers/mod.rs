pub mod dispatch_detail_controller;
pub mod estimate_list_controller;
pub mod profile_controller;

pub use dispatch_detail_controller::DispatchDetailController;
pub use estimate_list_controller::EstimateListController;
pub use profile_controller::ProfileController;
