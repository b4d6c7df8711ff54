mod service_account;
mod token;

pub use service_account::{ServiceAccount, ServiceAccountList, ServiceAccountSpec};
pub use token::{token_list, ServiceAccountToken, ServiceAccountTokenList};

pub const VERSION: &str = "v0alpha1";
