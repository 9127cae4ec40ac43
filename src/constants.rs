// Browser-side wiring constants.

// Inline style making the canvas fill its positioned container
pub const CANVAS_FILL_STYLE: [(&str, &str); 4] = [
    ("position", "absolute"),
    ("inset", "0"),
    ("width", "100%"),
    ("height", "100%"),
];

pub const PLACEHOLDER_PROPERTY: &str = "background-image";

// Listener event names
pub const RESIZE_EVENT: &str = "resize";
pub const POINTER_MOVE_EVENT: &str = "pointermove";
