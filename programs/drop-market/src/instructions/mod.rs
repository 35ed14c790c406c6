pub mod claim_refund;
pub mod init_campaign;
pub mod init_marketplace;
pub mod preorder;
pub mod withdraw;

pub use claim_refund::*;
pub use init_campaign::*;
pub use init_marketplace::*;
pub use preorder::*;
pub use withdraw::*;
