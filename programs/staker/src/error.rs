use anchor_lang::prelude::*;

#[error_code]
pub enum CustomErrorCode {
    #[msg("Supplied bump is not the canonical bump for this address")]
    InvalidBump = 1,
    #[msg("Mint does not match the configured mint")]
    WrongMint = 2,
    #[msg("Account is inconsistent with the configured program state")]
    WrongAccount = 3,
    #[msg("Insufficient funds")]
    InsufficientFunds = 4,
    #[msg("Arithmetic overflow")]
    Overflow = 5,
    #[msg("Arithmetic underflow")]
    Underflow = 6,
    #[msg("Account is not owned by a supported token program")]
    UnsupportedTokenProgram = 7,
    #[msg("Invalid mint authority")]
    InvalidMintAuthority = 8,
    #[msg("Observed balances do not match the planned exchange")]
    BalanceMismatch = 9,
    #[msg("Protocol is paused")]
    ProtocolPaused = 10,
    #[msg("Collateral mint and reward mint cannot be the same")]
    CollateralAndRewardMintCannotBeSame = 11,

    #[msg("ProgramData account did not match expected PDA.")]
    InvalidProgramData = 12,
    #[msg("Program has no upgrade authority (set to None).")]
    NoUpgradeAuthority = 13,
    #[msg("Signer is not the upgrade authority.")]
    InvalidUpgradeAuthority = 14,
}
