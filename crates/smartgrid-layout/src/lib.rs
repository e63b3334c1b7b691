#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::doc_markdown)]
//! Automatic dashboard layout engine.
//!
//! Given a list of widget types, assigns each a non-overlapping rectangle on
//! a 12-column grid with no user interaction:
//!
//! 1. **Ordering**: stable sort by priority tier, then category tier
//! 2. **First-fit**: each widget takes the first free top-left origin in a
//!    row-major scan of an [`OccupancyGrid`]
//! 3. **Row-fill**: one forward pass widens expandable widgets into free
//!    columns directly to their right
//!
//! ```
//! use smartgrid_layout::generate_smart_layout;
//! use smartgrid_core::WidgetPosition;
//!
//! let widgets = generate_smart_layout(["market_indices"]);
//! assert_eq!(widgets[0].position, WidgetPosition::new(0, 0, 12, 2));
//! ```

mod error;
mod generator;
mod ids;
mod layout;
mod occupancy;
mod order;
mod placement;
mod row_fill;

pub use error::LayoutError;
pub use generator::{generate_smart_layout, LayoutGenerator};
pub use ids::{id_generator, IdGenerator, RandomIds, SequentialIds};
pub use layout::Layout;
pub use occupancy::OccupancyGrid;
pub use order::{order_key, priority_order};
pub use placement::find_first_fit;
pub use row_fill::optimize_row_filling;
