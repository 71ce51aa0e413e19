//! Yield Basis pool contract interface

use alloy::sol;

sol! {
    interface IYieldBasisPool {
        function balanceOf(address owner) external view returns (uint256);
        function preview_withdraw(uint256 tokens) external view returns (uint256);
    }
}
