use crate::{
    domain::ListId,
    error::{ErrorKind, Result, TodoError},
    session::{request::Command, Session},
};

pub const LISTS_PATH: &str = "/lists";

const NOT_FOUND_MESSAGE: &str = "The specified item was not found.";

pub fn list_path(list_id: ListId) -> String {
    format!("{}/{}", LISTS_PATH, list_id)
}

/// Page to render when a form has to be shown again
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Lists,
    NewList,
    EditList(ListId),
    List(ListId),
}

/// What the web layer should send back
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    Redirect(String),
    Render { view: View, status: u16 },
    NoContent,
    NotFound,
}

impl Response {
    pub fn status(&self) -> u16 {
        match self {
            Self::Redirect(_) => 303,
            Self::Render { status, .. } => *status,
            Self::NoContent => 204,
            Self::NotFound => 404,
        }
    }
}

fn render(view: View) -> Response {
    Response::Render { view, status: 422 }
}

/// Maps a failed operation onto a response, flashing its message
fn reject(session: &mut Session, err: TodoError, form: View, ajax: bool) -> Response {
    tracing::warn!(error = %err, "request rejected");
    if err.kind() == ErrorKind::NotFound && ajax {
        return Response::NotFound;
    }
    if err.is_validation() {
        session.flash_error(err.to_string());
        return render(form);
    }

    match err {
        // Unparseable ids read the same as ids that don't exist
        TodoError::InvalidId(_) => session.flash_error(NOT_FOUND_MESSAGE),
        err => session.flash_error(err.to_string()),
    }
    Response::Redirect(LISTS_PATH.to_string())
}

/// Applies a command to the session's store and picks the response
pub fn dispatch(session: &mut Session, command: Command) -> Response {
    tracing::debug!(list_id = ?command.list_id(), "dispatching {:?}", command);
    let store = &mut session.store;
    match command {
        Command::CreateList(req) => match store.create_list(&req.list_name).map(|_| ()) {
            Ok(()) => {
                session.flash_success("The list has been created.");
                Response::Redirect(LISTS_PATH.to_string())
            }
            Err(err) => reject(session, err, View::NewList, false),
        },

        Command::RenameList(req) => match store.rename_list(req.list_id, &req.list_name).map(|_| ()) {
            Ok(()) => {
                session.flash_success("The list name has been changed.");
                Response::Redirect(list_path(req.list_id))
            }
            Err(err) => reject(session, err, View::EditList(req.list_id), false),
        },

        Command::DeleteList(req) => match store.delete_list(req.list_id) {
            Ok(_) if req.ajax => Response::NoContent,
            Ok(_) => {
                session.flash_success("The list has been deleted.");
                Response::Redirect(LISTS_PATH.to_string())
            }
            Err(err) => reject(session, err, View::Lists, req.ajax),
        },

        Command::AddTodo(req) => match store.add_todo(req.list_id, &req.todo).map(|_| ()) {
            Ok(()) => {
                session.flash_success("The todo was added.");
                Response::Redirect(list_path(req.list_id))
            }
            Err(err) => reject(session, err, View::List(req.list_id), false),
        },

        Command::RemoveTodo(req) => match store.remove_todo(req.list_id, req.todo_id) {
            Ok(_) if req.ajax => Response::NoContent,
            Ok(todo) => {
                session.flash_success(format!("'{}' has been removed from the list.", todo.name));
                Response::Redirect(list_path(req.list_id))
            }
            Err(err) => reject(session, err, View::List(req.list_id), req.ajax),
        },

        Command::SetTodoCompleted(req) => {
            match store.set_todo_completed(req.list_id, req.todo_id, req.completed) {
                Ok(()) => {
                    session.flash_success("The todo has been updated.");
                    Response::Redirect(list_path(req.list_id))
                }
                Err(err) => reject(session, err, View::List(req.list_id), false),
            }
        }

        Command::CompleteAll(req) => match store.complete_all(req.list_id) {
            Ok(()) => {
                session.flash_success("All todos completed.");
                Response::Redirect(list_path(req.list_id))
            }
            Err(err) => reject(session, err, View::List(req.list_id), false),
        },
    }
}

/// Like [`dispatch`], but also handles requests whose parameters failed to parse
///
/// `ajax` marks script-issued requests, which get bare statuses instead of
/// redirects when the target cannot be found.
pub fn handle(session: &mut Session, parsed: Result<Command>, ajax: bool) -> Response {
    match parsed {
        Ok(command) => dispatch(session, command),
        Err(err) => reject(session, err, View::Lists, ajax),
    }
}
