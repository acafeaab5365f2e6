mod belongs_to;
pub use belongs_to::{BelongsTo, BelongsToTarget};

mod has_many;
pub use has_many::HasMany;

mod has_one;
pub use has_one::HasOne;
