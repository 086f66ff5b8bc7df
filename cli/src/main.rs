//! Single-shot command-line client for the todo RPC service.
//!
//! Selects one action per invocation, issues exactly one RPC, and prints
//! the result in a fixed multi-line format. Exits 0 on success, 1 on flag
//! errors, invalid actions, unparseable due dates, or any RPC failure.

use std::fmt::Display;
use std::process;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use clap::Parser;
use todo_core::{
    CreateTodoRequest, DeleteTodoRequest, ListTodosRequest, RpcRequest, RpcResponse, Todo,
    TodoServiceClient, TodoStatus, UpdateTodoRequest,
};
use tracing::error;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "todo-cli", about = "Issue one RPC against the todo service")]
struct Args {
    /// Action to perform (create, update, delete, list)
    #[arg(long, default_value = "")]
    action: String,

    /// Todo title
    #[arg(long, default_value = "")]
    title: String,

    /// Todo description
    #[arg(long, default_value = "")]
    description: String,

    /// Due date (YYYY-MM-DD)
    #[arg(long = "due-date", default_value = "")]
    due_date: String,

    /// Todo status (pending, completed)
    #[arg(long, default_value = "")]
    status: String,

    /// Todo ID
    #[arg(long, default_value_t = 0)]
    id: i64,

    /// Base URL of the todo service
    #[arg(long, default_value = "http://localhost:8080")]
    server_url: String,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            process::exit(code);
        }
    };

    let client = TodoServiceClient::new(&args.server_url);

    match args.action.as_str() {
        "create" => create_todo(&client, &args),
        "update" => update_todo(&client, &args),
        "delete" => delete_todo(&client, &args),
        "list" => list_todos(&client, &args),
        _ => {
            println!("please specify an action: create, update, delete, or list");
            process::exit(1);
        }
    }
}

fn create_todo(client: &TodoServiceClient, args: &Args) {
    let due_date = parse_due_date_or_exit(&args.due_date);

    let req = or_exit(
        client.build_create_todo(&CreateTodoRequest {
            title: args.title.clone(),
            description: args.description.clone(),
            due_date,
        }),
        "failed to create todo",
    );
    let todo = or_exit(
        client.parse_create_todo(execute_or_exit(req)),
        "failed to create todo",
    );

    print!("{}", render_todo(&todo));
}

fn update_todo(client: &TodoServiceClient, args: &Args) {
    let due_date = parse_due_date_or_exit(&args.due_date);

    let req = or_exit(
        client.build_update_todo(&UpdateTodoRequest {
            id: args.id,
            title: args.title.clone(),
            description: args.description.clone(),
            due_date,
            status: parse_status(&args.status),
        }),
        "failed to update todo",
    );
    let todo = or_exit(
        client.parse_update_todo(execute_or_exit(req)),
        "failed to update todo",
    );

    print!("{}", render_todo(&todo));
}

fn delete_todo(client: &TodoServiceClient, args: &Args) {
    let req = or_exit(
        client.build_delete_todo(&DeleteTodoRequest { id: args.id }),
        "failed to delete todo",
    );
    or_exit(
        client.parse_delete_todo(execute_or_exit(req)),
        "failed to delete todo",
    );

    println!("Todo deleted successfully");
}

fn list_todos(client: &TodoServiceClient, args: &Args) {
    let req = or_exit(
        client.build_list_todos(&ListTodosRequest {
            status: parse_status(&args.status),
        }),
        "failed to list todos",
    );
    let todos = or_exit(
        client.parse_list_todos(execute_or_exit(req)),
        "failed to list todos",
    );

    for todo in &todos {
        print!("{}", render_todo(todo));
        println!("---");
    }
}

/// Execute an `RpcRequest` over HTTP. Non-2xx statuses come back as data so
/// the core client interprets them; only transport failures exit here.
fn execute_or_exit(req: RpcRequest) -> RpcResponse {
    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent();

    let mut builder = agent.post(&req.url);
    for (name, value) in &req.headers {
        builder = builder.header(name.as_str(), value.as_str());
    }

    let mut response = match builder.send(req.body.as_bytes()) {
        Ok(response) => response,
        Err(e) => {
            error!(url = %req.url, error = %e, "rpc transport failed");
            process::exit(1);
        }
    };

    let status = response.status().as_u16();
    let body = response.body_mut().read_to_string().unwrap_or_default();

    RpcResponse { status, body }
}

fn parse_due_date_or_exit(raw: &str) -> Option<DateTime<Utc>> {
    match parse_due_date(raw) {
        Ok(due_date) => due_date,
        Err(e) => {
            error!(due_date = raw, error = %e, "invalid due date format");
            process::exit(1);
        }
    }
}

/// Parse an optional `YYYY-MM-DD` string into midnight UTC.
fn parse_due_date(raw: &str) -> Result<Option<DateTime<Utc>>, chrono::ParseError> {
    if raw.is_empty() {
        return Ok(None);
    }
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")?;
    Ok(Some(date.and_time(NaiveTime::MIN).and_utc()))
}

/// Anything other than the two known names rides as the wire default, which
/// the server treats as `pending` on writes and "no filter" on list.
fn parse_status(raw: &str) -> TodoStatus {
    match raw {
        "pending" => TodoStatus::Pending,
        "completed" => TodoStatus::Completed,
        _ => TodoStatus::Unspecified,
    }
}

fn or_exit<T, E: Display>(result: Result<T, E>, context: &str) -> T {
    match result {
        Ok(value) => value,
        Err(e) => {
            error!(error = %e, "{}", context);
            process::exit(1);
        }
    }
}

fn render_todo(todo: &Todo) -> String {
    let mut out = String::new();
    out.push_str(&format!("ID: {}\n", todo.id));
    out.push_str(&format!("Title: {}\n", todo.title));
    out.push_str(&format!("Description: {}\n", todo.description));
    if let Some(due) = todo.due_date {
        out.push_str(&format!("Due Date: {}\n", due.format("%Y-%m-%d")));
    }
    out.push_str(&format!("Status: {}\n", todo.status));
    out.push_str(&format!("Created: {}\n", todo.created_at.format("%Y-%m-%d %H:%M:%S")));
    out.push_str(&format!("Updated: {}\n", todo.updated_at.format("%Y-%m-%d %H:%M:%S")));
    out
}
