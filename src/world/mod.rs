pub mod driver;
pub mod time;
pub mod view;

pub use driver::{AnimationState, ProgressDriver};
pub use time::{HeadlessTime, Time};
pub use view::SpinnerView;
