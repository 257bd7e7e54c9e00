//! Commands attached to the table's interactive elements.

use crate::model::RecordId;
use crate::widgets::action_menu::MenuCommand;

/// What clicking (or pressing Enter on) a table element does.
///
/// Stored in element data under [`COMMAND_KEY`](crate::widgets::COMMAND_KEY)
/// in the compact form produced by [`encode`](Self::encode).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableCommand {
    Sort(String),
    ToggleRow(RecordId),
    ToggleAll,
    Delete,
    Add,
    Export,
    PrevPage,
    NextPage,
    PageSize(usize),
    ClearSearch,
    Menu(MenuCommand),
}

impl TableCommand {
    pub fn encode(&self) -> String {
        match self {
            TableCommand::Sort(key) => format!("sort:{key}"),
            TableCommand::ToggleRow(id) => format!("row:{}", id.encode()),
            TableCommand::ToggleAll => "all".into(),
            TableCommand::Delete => "delete".into(),
            TableCommand::Add => "add".into(),
            TableCommand::Export => "export".into(),
            TableCommand::PrevPage => "page:prev".into(),
            TableCommand::NextPage => "page:next".into(),
            TableCommand::PageSize(size) => format!("size:{size}"),
            TableCommand::ClearSearch => "search:clear".into(),
            TableCommand::Menu(menu) => menu.encode(),
        }
    }

    pub fn parse(encoded: &str) -> Option<Self> {
        if encoded.starts_with("menu:") {
            return MenuCommand::parse(encoded).map(TableCommand::Menu);
        }
        let command = match encoded.split_once(':') {
            Some(("sort", key)) => TableCommand::Sort(key.to_string()),
            Some(("row", id)) => TableCommand::ToggleRow(RecordId::parse(id)?),
            Some(("page", "prev")) => TableCommand::PrevPage,
            Some(("page", "next")) => TableCommand::NextPage,
            Some(("size", size)) => TableCommand::PageSize(size.parse().ok()?),
            Some(("search", "clear")) => TableCommand::ClearSearch,
            Some(_) => return None,
            None => match encoded {
                "all" => TableCommand::ToggleAll,
                "delete" => TableCommand::Delete,
                "add" => TableCommand::Add,
                "export" => TableCommand::Export,
                _ => return None,
            },
        };
        Some(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commands_survive_encoding() {
        let commands = [
            TableCommand::Sort("created:at".into()),
            TableCommand::ToggleRow(RecordId::Text("a:b".into())),
            TableCommand::ToggleAll,
            TableCommand::PageSize(25),
            TableCommand::Menu(MenuCommand::Open {
                column: 3,
                row: RecordId::Int(7),
            }),
            TableCommand::Menu(MenuCommand::Select(1)),
        ];
        for command in commands {
            assert_eq!(TableCommand::parse(&command.encode()), Some(command));
        }
    }

    #[test]
    fn test_rejects_garbage() {
        assert_eq!(TableCommand::parse("size:lots"), None);
        assert_eq!(TableCommand::parse("row:q:1"), None);
        assert_eq!(TableCommand::parse("nope"), None);
    }
}
