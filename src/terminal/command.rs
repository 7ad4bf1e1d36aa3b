#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(String),
    Pick(String),
    Remove(String),
    List,
    Age(String),
    Weight(String),
    Analyze,
    Export,
    Clear,
    Catalog(Option<String>),
    Help,
    Quit,
    Empty,
    Unknown(String),
}

impl Command {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return Self::Empty;
        }

        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };
        let arg = || rest.to_string();

        match (word.to_lowercase().as_str(), rest.is_empty()) {
            ("add", false) => Self::Add(arg()),
            ("pick", false) => Self::Pick(arg()),
            ("remove" | "rm", false) => Self::Remove(arg().to_lowercase()),
            ("list" | "ls", _) => Self::List,
            ("age", _) => Self::Age(arg()),
            ("weight", _) => Self::Weight(arg()),
            ("analyze" | "predict", _) => Self::Analyze,
            ("export", _) => Self::Export,
            ("clear" | "new", _) => Self::Clear,
            ("catalog", true) => Self::Catalog(None),
            ("catalog", false) => Self::Catalog(Some(arg().to_lowercase())),
            ("help" | "?", _) => Self::Help,
            ("quit" | "exit", _) => Self::Quit,
            _ => Self::Unknown(line.to_string()),
        }
    }
}

pub const HELP: &str = "\
Commands:
  add <symptoms>      add symptoms, separated by spaces or commas
  pick <symptom>      add a single symptom (e.g. from the catalog)
  remove <symptom>    remove a selected symptom
  list                show the selected symptoms
  age <years>         set patient age (default 25)
  weight <kg>         set patient weight (default 70)
  analyze             send the selection for analysis
  export              save the displayed result to a text file
  clear               start a new analysis
  catalog [category]  list symptoms known to the service
  help                show this help
  quit                leave";
