//! Incremental assembly of a Solidity contract.
//!
//! Archetype generators push imports, bases, constructor lines and members in
//! their fixed capability order; the builder keeps every list duplicate-free
//! and renders the final source in one pass.

use super::solidity::{Base, LICENSE_HEADER, OWNABLE, OWNABLE_INIT, PRAGMA};

/// Contract under construction.
#[derive(Debug)]
pub struct ContractBuilder {
    imports: Vec<&'static str>,
    inheritance: Vec<&'static str>,
    state_variables: Vec<String>,
    base_initializer: String,
    extra_initializers: Vec<String>,
    constructor_body: Vec<String>,
    members: Vec<String>,
}

impl ContractBuilder {
    /// Starts a contract on top of the archetype `base`, constructed with
    /// `base_initializer` (e.g. `ERC20("My Token", "MTK")`).
    pub fn new(base: Base, base_initializer: impl Into<String>) -> Self {
        Self {
            imports: vec![base.import],
            inheritance: vec![base.name],
            state_variables: Vec::new(),
            base_initializer: base_initializer.into(),
            extra_initializers: Vec::new(),
            constructor_body: Vec::new(),
            members: Vec::new(),
        }
    }

    pub fn import(&mut self, path: &'static str) -> &mut Self {
        if !self.imports.contains(&path) {
            self.imports.push(path);
        }
        self
    }

    pub fn inherit(&mut self, name: &'static str) -> &mut Self {
        if !self.inheritance.contains(&name) {
            self.inheritance.push(name);
        }
        self
    }

    /// Imports and inherits `base`.
    pub fn extend(&mut self, base: Base) -> &mut Self {
        self.import(base.import).inherit(base.name)
    }

    /// Adds owner-gated access control. Safe to call once per capability that
    /// needs it; the base and its initializer appear once.
    pub fn require_owner(&mut self) -> &mut Self {
        self.extend(OWNABLE)
    }

    pub fn is_owned(&self) -> bool {
        self.inheritance.contains(&OWNABLE.name)
    }

    /// Chains another base constructor after the access control initializer.
    pub fn initializer(&mut self, init: impl Into<String>) -> &mut Self {
        let init = init.into();
        if !self.extra_initializers.contains(&init) {
            self.extra_initializers.push(init);
        }
        self
    }

    pub fn state_variable(&mut self, declaration: impl Into<String>) -> &mut Self {
        let declaration = declaration.into();
        if !self.state_variables.contains(&declaration) {
            self.state_variables.push(declaration);
        }
        self
    }

    pub fn constructor_statement(&mut self, statement: impl Into<String>) -> &mut Self {
        let statement = statement.into();
        if !self.constructor_body.contains(&statement) {
            self.constructor_body.push(statement);
        }
        self
    }

    /// Appends a member block. Blocks are written already indented one level.
    pub fn member(&mut self, block: impl Into<String>) -> &mut Self {
        let block = block.into();
        if !self.members.contains(&block) {
            self.members.push(block);
        }
        self
    }

    pub fn inheritance(&self) -> &[&'static str] {
        &self.inheritance
    }

    pub fn imports(&self) -> &[&'static str] {
        &self.imports
    }

    /// Renders the contract named `contract_name`.
    pub fn render(&self, contract_name: &str) -> String {
        let mut output = String::new();

        // Header
        output.push_str(LICENSE_HEADER);
        output.push('\n');
        output.push_str(PRAGMA);
        output.push_str("\n\n");

        // Imports
        for path in &self.imports {
            output.push_str(&format!("import \"{}\";\n", path));
        }
        output.push('\n');

        // Declaration
        output.push_str(&format!(
            "contract {} is {} {{\n",
            contract_name,
            self.inheritance.join(", ")
        ));

        // State
        if !self.state_variables.is_empty() {
            for var in &self.state_variables {
                output.push_str(&format!("    {}\n", var));
            }
            output.push('\n');
        }

        // Constructor
        output.push_str("    constructor()\n");
        output.push_str(&format!("        {}\n", self.base_initializer));
        if self.is_owned() {
            output.push_str(&format!("        {}\n", OWNABLE_INIT));
        }
        for init in &self.extra_initializers {
            output.push_str(&format!("        {}\n", init));
        }
        if self.constructor_body.is_empty() {
            output.push_str("    {}\n");
        } else {
            output.push_str("    {\n");
            for statement in &self.constructor_body {
                output.push_str(&format!("        {}\n", statement));
            }
            output.push_str("    }\n");
        }

        // Members
        for member in &self.members {
            output.push('\n');
            output.push_str(member);
            output.push('\n');
        }

        output.push_str("}\n");
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: Base = Base::new("ERC20", "@openzeppelin/contracts/token/ERC20/ERC20.sol");

    #[test]
    fn base_is_first_and_owner_is_deduplicated() {
        let mut builder = ContractBuilder::new(BASE, "ERC20(\"T\", \"T\")");
        builder.require_owner();
        builder.require_owner();
        assert_eq!(builder.inheritance(), &["ERC20", "Ownable"]);
        assert_eq!(builder.imports().len(), 2);
        assert_eq!(builder.imports()[0], BASE.import);
    }

    #[test]
    fn empty_constructor_renders_inline_body() {
        let builder = ContractBuilder::new(BASE, "ERC20(\"T\", \"T\")");
        let source = builder.render("T");
        assert!(source.contains("    constructor()\n        ERC20(\"T\", \"T\")\n    {}\n"));
        assert!(!source.contains("Ownable(msg.sender)"));
        assert!(source.ends_with("}\n"));
    }

    #[test]
    fn owner_initializer_precedes_extra_initializers() {
        let mut builder = ContractBuilder::new(BASE, "ERC20(\"T\", \"T\")");
        builder.initializer("ERC20Permit(\"T\")");
        builder.require_owner();
        let source = builder.render("T");
        let owner = source.find("Ownable(msg.sender)").unwrap();
        let permit = source.find("ERC20Permit(\"T\")").unwrap();
        assert!(owner < permit);
    }
}
