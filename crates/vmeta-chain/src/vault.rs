use alloy::sol;

sol! {
    /// The slice of the vault ABI this crate reads. `strategies(address)`
    /// returns the vault's accounting record for one strategy; the whole
    /// record must decode or the read is treated as failed.
    #[sol(rpc)]
    interface IVault {
        function strategies(address strategy) external view returns (
            uint256 performanceFee,
            uint256 activation,
            uint256 debtRatio,
            uint256 rateLimit,
            uint256 lastReport,
            uint256 totalDebt,
            uint256 totalGain,
            uint256 totalLoss
        );
    }
}
