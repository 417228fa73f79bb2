pub mod client;
pub mod paging;

pub use crate::domain::model::{
    Alpha, AlphaRuntimeError, ApiResponse, AssetClass, Author, Insight, PriceQuote, PriceType,
};
pub use crate::domain::params::RequestParams;
pub use crate::domain::ports::{ApiRequest, ConfigProvider, Executor, HttpMethod, Paginated};
pub use crate::domain::range::Range;
pub use crate::utils::error::Result;
