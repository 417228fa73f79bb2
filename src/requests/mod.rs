pub mod alpha;
pub mod author;
pub mod conversation;
pub mod price;
pub mod subscription;

pub use alpha::{
    GetAlphaById, GetAlphaErrors, GetAlphaInsights, GetAlphaList, GetAlphaPrices, SearchAlphas,
};
pub use author::{GetAuthorById, SearchAuthors};
pub use conversation::CreateConversation;
pub use price::CreateBidPrice;
pub use subscription::{Subscribe, Unsubscribe};
