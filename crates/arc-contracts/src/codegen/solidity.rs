//! Fixed Solidity fragments shared by every archetype.

/// First line of every generated file.
pub const LICENSE_HEADER: &str = "// SPDX-License-Identifier: MIT";

/// Compiler version pragma.
pub const PRAGMA: &str = "pragma solidity ^0.8.20;";

/// Owner-gated access control base.
pub const OWNABLE: Base = Base {
    name: "Ownable",
    import: "@openzeppelin/contracts/access/Ownable.sol",
};

/// Initializer chained onto the constructor whenever [`OWNABLE`] is inherited.
pub const OWNABLE_INIT: &str = "Ownable(msg.sender)";

/// An OpenZeppelin base contract and the path it is imported from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Base {
    pub name: &'static str,
    pub import: &'static str,
}

impl Base {
    pub const fn new(name: &'static str, import: &'static str) -> Self {
        Self { name, import }
    }
}

/// `pause`/`unpause` entry points for any `*Pausable` extension.
pub const PAUSE_MEMBERS: &str = "    function pause() public onlyOwner {
        _pause();
    }

    function unpause() public onlyOwner {
        _unpause();
    }";
