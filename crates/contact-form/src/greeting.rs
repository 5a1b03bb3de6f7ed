// File: src/greeting.rs
// Purpose: Name prompt and personalized welcome, persisted under one local key

/// Where the visitor's name is kept between visits
pub trait NameStore {
    fn load(&self) -> Option<String>;

    fn save(&mut self, name: &str) -> Result<(), GreetingError>;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GreetingError {
    /// The prompt was submitted with nothing but whitespace
    #[error("name must not be empty")]
    EmptyName,

    #[error("failed to store name: {0}")]
    Storage(String),
}

/// What the greeting area should show
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GreetingState {
    /// Ask for the visitor's name
    Prompt,
    /// Hide the prompt and greet by name
    Welcome(String),
}

/// In-process store, used natively and in tests
#[derive(Debug, Clone, Default)]
pub struct MemoryNameStore {
    name: Option<String>,
}

impl MemoryNameStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }
}

impl NameStore for MemoryNameStore {
    fn load(&self) -> Option<String> {
        self.name.clone()
    }

    fn save(&mut self, name: &str) -> Result<(), GreetingError> {
        self.name = Some(name.to_string());
        Ok(())
    }
}

pub struct Greeter<S: NameStore> {
    store: S,
}

impl<S: NameStore> Greeter<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Initial state on page load
    pub fn restore(&self) -> GreetingState {
        match self.store.load() {
            Some(name) if !name.is_empty() => GreetingState::Welcome(name),
            _ => GreetingState::Prompt,
        }
    }

    /// Store the trimmed name and switch to the welcome message
    pub fn submit(&mut self, raw: &str) -> Result<GreetingState, GreetingError> {
        let name = raw.trim();
        if name.is_empty() {
            return Err(GreetingError::EmptyName);
        }

        self.store.save(name)?;
        tracing::debug!(name, "stored visitor name");
        Ok(GreetingState::Welcome(name.to_string()))
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
