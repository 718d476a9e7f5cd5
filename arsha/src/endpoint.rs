use strum_macros::{Display, EnumString};

/// Enum for the arsha.io v2 endpoints in use
#[derive(EnumString, Display, Copy, Clone, Debug)]
pub enum Endpoint {
    #[strum(serialize = "GetBiddingInfoList")]
    BiddingInfoList,
    #[strum(serialize = "GetWorldMarketWaitList")]
    WorldMarketWaitList,
}
