pub const ERR_UNAUTHORIZED: &str = "Unauthorized";
pub const ERR_ALREADY_EXISTS: &str = "Already exists";
pub const ERR_NOT_FOUND: &str = "Proposal not found";
pub const ERR_EXPIRED: &str = "Voting period has expired";
pub const ERR_NOT_ACTIVE: &str = "Proposal is not active";
pub const ERR_ALREADY_VOTED: &str = "Already voted";
pub const ERR_INSUFFICIENT_FUNDS: &str = "Insufficient treasury funds";
pub const ERR_INVALID_PARAMETER: &str = "Invalid parameter";
pub const ERR_DELAY_NOT_MET: &str = "Voting period has not ended";
pub const ERR_NOT_MEMBER: &str = "Not a member";
pub const ERR_INSUFFICIENT_REPUTATION: &str = "Insufficient reputation";
