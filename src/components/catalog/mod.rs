//! Product catalog: payload types, price formatting and the product list.

mod product_list;
mod types;

pub use product_list::ProductList;
pub use types::{Catalog, Product, format_price};
