use crate::{
    domain::{normalize_name, ListId, TodoId},
    error::{Result, TodoError},
};
use std::{collections::HashMap, str::FromStr};

/// Raw path and form parameters as handed over by the web layer
pub type Params = HashMap<String, String>;

fn required<'a>(params: &'a Params, key: &str) -> Result<&'a str> {
    params
        .get(key)
        .map(String::as_str)
        .ok_or_else(|| TodoError::InvalidParam(format!("missing '{}'", key)))
}

fn id_param<T>(params: &Params, key: &str) -> Result<T>
where
    T: FromStr<Err = TodoError>,
{
    required(params, key)?.parse()
}

fn name_param(params: &Params, key: &str) -> Result<String> {
    required(params, key).map(normalize_name)
}

fn flag_param(params: &Params, key: &str) -> bool {
    params.get(key).map(|v| v == "true").unwrap_or(false)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateList {
    pub list_name: String,
}

impl CreateList {
    pub fn from_params(params: &Params) -> Result<Self> {
        Ok(Self {
            list_name: name_param(params, "list_name")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameList {
    pub list_id: ListId,
    pub list_name: String,
}

impl RenameList {
    pub fn from_params(params: &Params) -> Result<Self> {
        Ok(Self {
            list_id: id_param(params, "id")?,
            list_name: name_param(params, "list_name")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteList {
    pub list_id: ListId,
    /// Request came from a script and expects a bare status
    pub ajax: bool,
}

impl DeleteList {
    pub fn from_params(params: &Params) -> Result<Self> {
        Ok(Self {
            list_id: id_param(params, "id")?,
            ajax: flag_param(params, "ajax"),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddTodo {
    pub list_id: ListId,
    pub todo: String,
}

impl AddTodo {
    pub fn from_params(params: &Params) -> Result<Self> {
        Ok(Self {
            list_id: id_param(params, "list_id")?,
            todo: name_param(params, "todo")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoveTodo {
    pub list_id: ListId,
    pub todo_id: TodoId,
    pub ajax: bool,
}

impl RemoveTodo {
    pub fn from_params(params: &Params) -> Result<Self> {
        Ok(Self {
            list_id: id_param(params, "list_id")?,
            todo_id: id_param(params, "id")?,
            ajax: flag_param(params, "ajax"),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetTodoCompleted {
    pub list_id: ListId,
    pub todo_id: TodoId,
    pub completed: bool,
}

impl SetTodoCompleted {
    /// Anything other than the literal `"true"` means incomplete
    pub fn from_params(params: &Params) -> Result<Self> {
        Ok(Self {
            list_id: id_param(params, "list_id")?,
            todo_id: id_param(params, "id")?,
            completed: flag_param(params, "completed"),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompleteAll {
    pub list_id: ListId,
}

impl CompleteAll {
    pub fn from_params(params: &Params) -> Result<Self> {
        Ok(Self {
            list_id: id_param(params, "id")?,
        })
    }
}

/// A typed state change requested by the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    CreateList(CreateList),
    RenameList(RenameList),
    DeleteList(DeleteList),
    AddTodo(AddTodo),
    RemoveTodo(RemoveTodo),
    SetTodoCompleted(SetTodoCompleted),
    CompleteAll(CompleteAll),
}

impl Command {
    /// The list the command targets, if any
    pub fn list_id(&self) -> Option<ListId> {
        match self {
            Self::CreateList(_) => None,
            Self::RenameList(r) => Some(r.list_id),
            Self::DeleteList(r) => Some(r.list_id),
            Self::AddTodo(r) => Some(r.list_id),
            Self::RemoveTodo(r) => Some(r.list_id),
            Self::SetTodoCompleted(r) => Some(r.list_id),
            Self::CompleteAll(r) => Some(r.list_id),
        }
    }
}

macro_rules! impl_from_request {
    ($($variant:ident),*) => {
        $(
            impl From<$variant> for Command {
                fn from(req: $variant) -> Self {
                    Command::$variant(req)
                }
            }
        )*
    };
}

impl_from_request!(
    CreateList,
    RenameList,
    DeleteList,
    AddTodo,
    RemoveTodo,
    SetTodoCompleted,
    CompleteAll
);

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> Params {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_names_are_trimmed() {
        let req = CreateList::from_params(&params(&[("list_name", "  Groceries ")])).unwrap();
        assert_eq!(req.list_name, "Groceries");

        let req = AddTodo::from_params(&params(&[("list_id", "2"), ("todo", "\tMilk\n")])).unwrap();
        assert_eq!(req.list_id, ListId::new(2));
        assert_eq!(req.todo, "Milk");
    }

    #[test]
    fn test_missing_param() {
        let err = CreateList::from_params(&params(&[])).unwrap_err();
        assert!(matches!(err, TodoError::InvalidParam(_)));
    }

    #[test]
    fn test_bad_id_is_invalid_id() {
        let err = RenameList::from_params(&params(&[("id", "abc"), ("list_name", "X")])).unwrap_err();
        assert!(matches!(err, TodoError::InvalidId(_)));
    }

    #[test]
    fn test_completed_flag() {
        let base = [("list_id", "1"), ("id", "3")];

        let mut p = params(&base);
        p.insert("completed".to_string(), "true".to_string());
        let req = SetTodoCompleted::from_params(&p).unwrap();
        assert!(req.completed);
        assert_eq!(req.todo_id, TodoId::new(3));

        p.insert("completed".to_string(), "false".to_string());
        assert!(!SetTodoCompleted::from_params(&p).unwrap().completed);

        assert!(!SetTodoCompleted::from_params(&params(&base)).unwrap().completed);
    }

    #[test]
    fn test_command_list_id() {
        let cmd: Command = CompleteAll {
            list_id: ListId::new(4),
        }
        .into();
        assert_eq!(cmd.list_id(), Some(ListId::new(4)));

        let cmd: Command = CreateList {
            list_name: "X".to_string(),
        }
        .into();
        assert_eq!(cmd.list_id(), None);
    }
}
