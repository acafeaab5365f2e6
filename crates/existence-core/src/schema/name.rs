use heck::ToSnakeCase;

#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Name {
    pub parts: Vec<String>,
}

impl Name {
    pub fn new(src: &str) -> Self {
        let parts = src
            .to_snake_case()
            .split('_')
            .filter(|part| !part.is_empty())
            .map(String::from)
            .collect();
        Self { parts }
    }

    pub fn snake_case(&self) -> String {
        self.parts.join("_")
    }

    /// Default table name: the snake case name with its last word pluralized.
    pub fn table_name(&self) -> String {
        match self.parts.split_last() {
            Some((last, rest)) => {
                let mut parts = rest.to_vec();
                parts.push(pluralizer::pluralize(last, 2, false));
                parts.join("_")
            }
            None => String::new(),
        }
    }
}
