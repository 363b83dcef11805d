//! ERC1155 multi-token generation.

use super::builder::ContractBuilder;
use super::options::TokenOptions;
use super::solidity::{Base, PAUSE_MEMBERS};

/// Multi-token contracts have no symbol to borrow a name from.
pub const CONTRACT_NAME: &str = "MyToken";

const ERC1155: Base = Base::new("ERC1155", "@openzeppelin/contracts/token/ERC1155/ERC1155.sol");
const BURNABLE: Base = Base::new(
    "ERC1155Burnable",
    "@openzeppelin/contracts/token/ERC1155/extensions/ERC1155Burnable.sol",
);
const PAUSABLE: Base = Base::new(
    "ERC1155Pausable",
    "@openzeppelin/contracts/token/ERC1155/extensions/ERC1155Pausable.sol",
);
const SUPPLY: Base = Base::new(
    "ERC1155Supply",
    "@openzeppelin/contracts/token/ERC1155/extensions/ERC1155Supply.sol",
);

const MINT_MEMBERS: &str = "    function mint(address account, uint256 id, uint256 amount, bytes memory data)
        public
        onlyOwner
    {
        _mint(account, id, amount, data);
    }

    function mintBatch(address to, uint256[] memory ids, uint256[] memory amounts, bytes memory data)
        public
        onlyOwner
    {
        _mintBatch(to, ids, amounts, data);
    }";

const SET_URI_MEMBER: &str = "    function setURI(string memory newuri) public onlyOwner {
        _setURI(newuri);
    }";

/// Composes an ERC1155 contract.
///
/// Order: mint (single and batch), burn, pause, supply tracking. `setURI` is
/// always the last member.
pub fn build(opts: &TokenOptions) -> ContractBuilder {
    let mut contract = ContractBuilder::new(ERC1155, format!("ERC1155(\"{}\")", opts.uri));

    if opts.flag("mintable") {
        contract.require_owner().member(MINT_MEMBERS);
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

    if opts.flag("supply") {
        contract.extend(SUPPLY);
    }

    // setURI is owner-gated, so access control is present even when no
    // capability above asked for it.
    contract.require_owner().member(SET_URI_MEMBER);

    contract
}
