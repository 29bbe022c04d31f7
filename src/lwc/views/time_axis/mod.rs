mod crosshair_time_axis_view;

pub use crosshair_time_axis_view::CrosshairTimeAxisView;
