mod view;

pub use view::ProductGrid;
