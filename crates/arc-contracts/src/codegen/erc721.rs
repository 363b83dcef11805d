//! ERC721 non-fungible token generation.

use super::builder::ContractBuilder;
use super::options::TokenOptions;
use super::solidity::{Base, PAUSE_MEMBERS};

const ERC721: Base = Base::new("ERC721", "@openzeppelin/contracts/token/ERC721/ERC721.sol");
const BURNABLE: Base = Base::new(
    "ERC721Burnable",
    "@openzeppelin/contracts/token/ERC721/extensions/ERC721Burnable.sol",
);
const PAUSABLE: Base = Base::new(
    "ERC721Pausable",
    "@openzeppelin/contracts/token/ERC721/extensions/ERC721Pausable.sol",
);
const ENUMERABLE: Base = Base::new(
    "ERC721Enumerable",
    "@openzeppelin/contracts/token/ERC721/extensions/ERC721Enumerable.sol",
);

const BASE_URI_MEMBERS: &str = "    function _baseURI() internal view override returns (string memory) {
        return _baseTokenURI;
    }

    function setBaseURI(string memory baseURI) public onlyOwner {
        _baseTokenURI = baseURI;
    }";

const SAFE_MINT_AUTO_ID: &str = "    function safeMint(address to) public onlyOwner {
        uint256 tokenId = _nextTokenId++;
        _safeMint(to, tokenId);
    }";

const SAFE_MINT_EXPLICIT_ID: &str = "    function safeMint(address to, uint256 tokenId) public onlyOwner {
        _safeMint(to, tokenId);
    }";

/// Composes an ERC721 contract.
///
/// Order: base URI accessor, mint, burn, pause, enumerable.
pub fn build(opts: &TokenOptions) -> ContractBuilder {
    let mut contract = ContractBuilder::new(
        ERC721,
        format!("ERC721(\"{}\", \"{}\")", opts.name, opts.symbol),
    );

    let mintable = opts.flag("mintable");
    let auto_increment = mintable && opts.flag("autoIncrement");

    // The token counter is declared ahead of the base URI.
    if auto_increment {
        contract.state_variable("uint256 private _nextTokenId;");
    }

    if let Some(base_uri) = opts.text("baseUri") {
        contract
            .require_owner()
            .state_variable(format!("string private _baseTokenURI = \"{}\";", base_uri))
            .member(BASE_URI_MEMBERS);
    }

    if mintable {
        contract.require_owner();
        if auto_increment {
            contract.member(SAFE_MINT_AUTO_ID);
        } else {
            contract.member(SAFE_MINT_EXPLICIT_ID);
        }
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

    if opts.flag("enumerable") {
        contract.extend(ENUMERABLE);
    }

    contract
}
