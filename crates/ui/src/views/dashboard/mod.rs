mod tabs;
mod view;

pub use view::DashboardView;
