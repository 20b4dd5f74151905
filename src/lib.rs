//! Generic containers and shape comparison.
//!
//! Three independent pieces glued together by the `demo` binary:
//!
//! - [`Holder`] / [`NumericHolder`]: single-value wrappers that render with
//!   the runtime name of their type parameter.
//! - [`HasArea`] with [`Square`] and [`Circle`]: a single-method capability
//!   and two value types implementing it.
//! - [`AreaComparator`] / [`RadiusComparator`]: order two possibly-absent
//!   values, polymorphically by area or concretely by radius.
//!
//! Run the driver with: cargo run --bin demo

pub mod compare;
pub mod holder;
pub mod shapes;

pub use compare::{ordering_label, AreaComparator, Comparator, RadiusComparator};
pub use holder::{Holder, Numeric, NumericHolder};
pub use shapes::{Circle, HasArea, Square};
