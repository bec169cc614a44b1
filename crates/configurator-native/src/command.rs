use anyhow::{anyhow, bail};
use configurator_core::Control;

/// Which option a selection names.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Target {
    Index(usize),
    Label(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// `<control> <index|label>`: user pick
    Select { control: Control, target: Target },
    /// `external <control> [label]`: label reported by the scene
    External {
        control: Control,
        label: Option<String>,
    },
    /// `event <json>`: inbound custom event
    Event(String),
    State,
}

fn control(word: &str) -> anyhow::Result<Control> {
    Control::from_key(word).ok_or_else(|| {
        let known: Vec<_> = Control::ALL.iter().map(|c| c.key()).collect();
        anyhow!("unknown control {word:?} (expected one of {})", known.join(", "))
    })
}

/// Parse one input line. Blank lines and `#` comments yield `None`.
pub fn parse_command(line: &str) -> anyhow::Result<Option<Command>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    let (head, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = rest.trim();
    let cmd = match head {
        "state" => Command::State,
        "event" => {
            if rest.is_empty() {
                bail!("event needs a JSON body");
            }
            Command::Event(rest.to_owned())
        }
        "external" => {
            let (name, label) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
            let label = label.trim();
            Command::External {
                control: control(name)?,
                label: (!label.is_empty()).then(|| label.to_owned()),
            }
        }
        name => {
            let control = control(name)?;
            if rest.is_empty() {
                bail!("{control} needs an index or label");
            }
            let target = match rest.parse::<usize>() {
                Ok(i) => Target::Index(i),
                Err(_) => Target::Label(rest.to_owned()),
            };
            Command::Select { control, target }
        }
    };
    Ok(Some(cmd))
}
