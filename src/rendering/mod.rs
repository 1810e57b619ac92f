mod plot;

pub use plot::{encode_png, legend, render_base64, render_response};
