mod crosshair_pane_view;

pub use crosshair_pane_view::CrosshairPaneView;
