//! Greeting step.

use crate::io::{StepInputs, StepOutputs};
use handlebars::Handlebars;
use serde_json::json;

/// Subject used when no usable `name` input is supplied.
pub const DEFAULT_NAME: &str = "World";

/// Template rendered when none is configured.
pub const DEFAULT_TEMPLATE: &str = "Hello, {{name}}!";

/// Typed view of the greeter's inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GreeterInputs {
    pub name: String,
}

impl GreeterInputs {
    /// Read `name`, falling back to [`DEFAULT_NAME`] when it is absent, empty or not a string.
    pub fn from_inputs(inputs: &StepInputs) -> Self {
        let name = match inputs.get_str("name") {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => DEFAULT_NAME.to_string(),
        };
        Self { name }
    }
}

impl Default for GreeterInputs {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
        }
    }
}

/// Renders greeting messages.
#[derive(Debug)]
pub struct Greeter {
    template: String,
    handlebars: Handlebars<'static>,
}

impl Greeter {
    /// Create a greeter using [`DEFAULT_TEMPLATE`].
    pub fn new() -> Self {
        Self::with_template(DEFAULT_TEMPLATE)
    }

    /// Create a greeter with a custom Handlebars template.
    ///
    /// The template sees a single variable, `name`.
    pub fn with_template(template: &str) -> Self {
        let mut handlebars = Handlebars::new();
        handlebars.set_strict_mode(false);
        handlebars.register_escape_fn(handlebars::no_escape);

        Self {
            template: template.to_string(),
            handlebars,
        }
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    /// Render the greeting for `name`.
    pub fn message(&self, name: &str) -> String {
        match self
            .handlebars
            .render_template(&self.template, &json!({ "name": name }))
        {
            Ok(message) => message,
            Err(e) => {
                tracing::warn!(error = %e, template = %self.template, "Failed to render greeting");
                format!("Hello, {}!", name)
            }
        }
    }

    /// Run the step: read `name`, produce `message`.
    pub fn run(&self, inputs: &StepInputs) -> StepOutputs {
        let inputs = GreeterInputs::from_inputs(inputs);
        tracing::debug!(name = %inputs.name, "Greeting");

        let mut outputs = StepOutputs::new();
        outputs.set("message", self.message(&inputs.name));
        outputs
    }
}

impl Default for Greeter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn message_for(inputs: &StepInputs) -> String {
        let outputs = Greeter::new().run(inputs);
        assert_eq!(outputs.len(), 1);
        outputs.get("message").unwrap().as_str().unwrap().to_string()
    }

    #[test]
    fn test_default_name() {
        let mut empty = StepInputs::new();
        assert_eq!(message_for(&empty), "Hello, World!");

        empty.set("name", "");
        assert_eq!(message_for(&empty), "Hello, World!");

        for wrong in [Value::from(42), Value::Bool(true), Value::Null, serde_json::json!(["a"])] {
            let mut inputs = StepInputs::new();
            inputs.set("name", wrong);
            assert_eq!(message_for(&inputs), "Hello, World!");
        }
    }

    #[test]
    fn test_name_is_used_verbatim() {
        for name in ["Alice", "<b>Bob</b>", "O'Brien & co", "{{name}}", "  "] {
            let mut inputs = StepInputs::new();
            inputs.set("name", name);

            let message = message_for(&inputs);
            assert!(message.contains(name), "{:?} not in {:?}", name, message);
        }
    }

    #[test]
    fn test_custom_template() {
        let greeter = Greeter::with_template("Hi there, {{ name }}.");
        assert_eq!(greeter.message("Alice"), "Hi there, Alice.");
    }

    #[test]
    fn test_broken_template_falls_back() {
        let greeter = Greeter::with_template("Hello, {{#if name}}{{name}}");
        assert_eq!(greeter.message("Alice"), "Hello, Alice!");
    }

    #[test]
    fn test_typed_inputs() {
        let mut inputs = StepInputs::new();
        inputs.set("name", "Carol");
        assert_eq!(GreeterInputs::from_inputs(&inputs).name, "Carol");
        assert_eq!(GreeterInputs::from_inputs(&StepInputs::new()), GreeterInputs::default());
    }
}
