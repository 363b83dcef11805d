//! ERC20 fungible token generation.

use super::builder::ContractBuilder;
use super::options::TokenOptions;
use super::solidity::{Base, PAUSE_MEMBERS};

const ERC20: Base = Base::new("ERC20", "@openzeppelin/contracts/token/ERC20/ERC20.sol");
const BURNABLE: Base = Base::new(
    "ERC20Burnable",
    "@openzeppelin/contracts/token/ERC20/extensions/ERC20Burnable.sol",
);
const PAUSABLE: Base = Base::new(
    "ERC20Pausable",
    "@openzeppelin/contracts/token/ERC20/extensions/ERC20Pausable.sol",
);
const PERMIT: Base = Base::new(
    "ERC20Permit",
    "@openzeppelin/contracts/token/ERC20/extensions/ERC20Permit.sol",
);

const MINT_MEMBER: &str = "    function mint(address to, uint256 amount) public onlyOwner {
        _mint(to, amount);
    }";

/// Composes an ERC20 contract.
///
/// Capabilities are applied in a fixed order (mint, burn, pause, permit)
/// regardless of the order the caller supplied them in.
pub fn build(opts: &TokenOptions) -> ContractBuilder {
    let mut contract = ContractBuilder::new(
        ERC20,
        format!("ERC20(\"{}\", \"{}\")", opts.name, opts.symbol),
    );

    if opts.flag("mintable") {
        contract.require_owner().member(MINT_MEMBER);
    }

    if opts.flag("burnable") {
        contract.extend(BURNABLE);
    }

    if opts.flag("pausable") {
        contract
            .import(PAUSABLE.import)
            .require_owner()
            .inherit(PAUSABLE.name)
            .member(PAUSE_MEMBERS);
    }

    if opts.flag("permit") {
        contract
            .extend(PERMIT)
            .initializer(format!("ERC20Permit(\"{}\")", opts.name));
    }

    if let Some(amount) = opts.premint() {
        contract.constructor_statement(format!(
            "_mint(msg.sender, {} * 10 ** decimals());",
            amount
        ));
    }

    contract
}
