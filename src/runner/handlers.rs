//! One handler per menu action.
//!
//! Each handler gathers its input through a [`Prompter`], calls into the
//! façade and returns the lines to show. Façade failures become
//! `Error: ...` lines so a failed action never ends the session; only
//! prompter (terminal) failures propagate.

use crate::app::{App, MenuAction};
use crate::fs_op::{self, FsOpError, PermissionMask};
use crate::runner::prompt::Prompter;
use crate::ui;

/// Run `action` against `app` and return the screen content.
///
/// `Exit` produces the farewell text and has no side effects.
pub fn handle_action(
    app: &mut App,
    action: MenuAction,
    prompter: &mut dyn Prompter,
) -> anyhow::Result<Vec<String>> {
    let mut out = ui::section_title(action.label());
    out.push(String::new());

    let body = match action {
        MenuAction::List => handle_list(app),
        MenuAction::ChangeDirectory => handle_change_dir(app, prompter)?,
        MenuAction::CreateFile => handle_create(app, prompter, false)?,
        MenuAction::CreateDirectory => handle_create(app, prompter, true)?,
        MenuAction::CopyFile => handle_transfer(app, prompter, false)?,
        MenuAction::MoveFile => handle_transfer(app, prompter, true)?,
        MenuAction::DeleteFile => handle_delete(app, prompter, false)?,
        MenuAction::DeleteDirectory => handle_delete(app, prompter, true)?,
        MenuAction::Search => handle_search(app, prompter)?,
        MenuAction::ViewPermissions => handle_view_permissions(app, prompter)?,
        MenuAction::ChangePermissions => handle_change_permissions(app, prompter)?,
        MenuAction::ViewDetails => handle_details(app, prompter)?,
        MenuAction::Exit => return Ok(ui::farewell_lines()),
    };
    out.extend(body);
    Ok(out)
}

fn error_lines(err: &FsOpError) -> Vec<String> {
    tracing::info!(error = %err, "operation failed");
    vec![format!("Error: {}", err)]
}

fn handle_list(app: &App) -> Vec<String> {
    let mut out = vec![format!("Listing contents of: {}", app.ctx), String::new()];
    match fs_op::list(&app.ctx) {
        Ok(entries) => out.extend(ui::format_listing(&entries)),
        Err(e) => out.extend(error_lines(&e)),
    }
    out
}

fn handle_change_dir(app: &mut App, p: &mut dyn Prompter) -> anyhow::Result<Vec<String>> {
    let input = p.input("Enter directory path (or '..' for parent, '~' for home)")?;
    Ok(match app.change_dir(&input) {
        Ok(ctx) => vec![format!("Current directory: {}", ctx)],
        Err(e) => error_lines(&e),
    })
}

fn handle_create(app: &App, p: &mut dyn Prompter, directory: bool) -> anyhow::Result<Vec<String>> {
    let what = if directory { "directory" } else { "file" };
    let name = p.input(&format!("Enter {} name", what))?;
    let result = if directory {
        fs_op::create_directory(&app.ctx, &name)
    } else {
        fs_op::create_file(&app.ctx, &name)
    };
    Ok(match result {
        Ok(()) => vec![format!(
            "{} created successfully: {}",
            if directory { "Directory" } else { "File" },
            app.ctx.join_input(&name).display()
        )],
        Err(e) => error_lines(&e),
    })
}

fn handle_transfer(app: &App, p: &mut dyn Prompter, is_move: bool) -> anyhow::Result<Vec<String>> {
    let source = p.input("Enter source file path")?;
    let destination = p.input("Enter destination file path")?;
    let result = if is_move {
        fs_op::move_file(&app.ctx, &source, &destination)
    } else {
        fs_op::copy_file(&app.ctx, &source, &destination)
    };
    Ok(match result {
        Ok(()) => vec![
            format!("File {} successfully!", if is_move { "moved" } else { "copied" }),
            format!("From: {}", app.ctx.join_input(&source).display()),
            format!("To:   {}", app.ctx.join_input(&destination).display()),
        ],
        Err(e) => error_lines(&e),
    })
}

fn handle_delete(app: &App, p: &mut dyn Prompter, directory: bool) -> anyhow::Result<Vec<String>> {
    let what = if directory { "directory" } else { "file" };
    let name = p.input(&format!("Enter {} name to delete", what))?;

    if app.settings.confirm_destructive {
        let question = if directory {
            format!("Are you sure you want to delete '{}' and all its contents?", name)
        } else {
            format!("Are you sure you want to delete '{}'?", name)
        };
        if !p.confirm(&question)? {
            return Ok(vec!["Deletion cancelled.".to_string()]);
        }
    }

    let result = if directory {
        fs_op::delete_directory(&app.ctx, &name)
    } else {
        fs_op::delete_file(&app.ctx, &name)
    };
    Ok(match result {
        Ok(()) => vec![format!(
            "{} deleted successfully!",
            if directory { "Directory" } else { "File" }
        )],
        Err(e) => error_lines(&e),
    })
}

fn handle_search(app: &App, p: &mut dyn Prompter) -> anyhow::Result<Vec<String>> {
    let term = p.input("Enter file name to search")?;
    let mut out = vec![format!("Searching in: {}", app.ctx), String::new()];
    let mut search = fs_op::search(&app.ctx, &term);
    let matches: Vec<_> = search.by_ref().collect();
    out.extend(ui::format_search_results(&term, &matches, search.warnings()));
    Ok(out)
}

fn handle_view_permissions(app: &App, p: &mut dyn Prompter) -> anyhow::Result<Vec<String>> {
    let name = p.input("Enter file/directory name")?;
    Ok(match fs_op::get_permissions(&app.ctx, &name) {
        Ok(mask) => {
            let mut out = vec![format!("File: {}", app.ctx.join_input(&name).display())];
            out.extend(ui::format_permission_breakdown(mask));
            out
        }
        Err(e) => error_lines(&e),
    })
}

fn handle_change_permissions(app: &App, p: &mut dyn Prompter) -> anyhow::Result<Vec<String>> {
    let name = p.input("Enter file/directory name")?;
    let current = match fs_op::get_permissions(&app.ctx, &name) {
        Ok(mask) => mask,
        Err(e) => return Ok(error_lines(&e)),
    };
    let mut out = vec![format!("Current permissions: {}", current)];

    let text = p.input("Enter new permissions in octal format (e.g., 644, 755)")?;
    let applied = PermissionMask::parse_octal(&text)
        .and_then(|mask| fs_op::set_permissions(&app.ctx, &name, mask))
        .and_then(|()| fs_op::get_permissions(&app.ctx, &name));
    match applied {
        Ok(now) => {
            out.push("Permissions changed successfully!".to_string());
            out.push(format!("New permissions: {}", now));
        }
        Err(e) => out.extend(error_lines(&e)),
    }
    Ok(out)
}

fn handle_details(app: &App, p: &mut dyn Prompter) -> anyhow::Result<Vec<String>> {
    let name = p.input("Enter file/directory name")?;
    Ok(match fs_op::get_details(&app.ctx, &name) {
        Ok(info) => ui::format_file_stats(&info),
        Err(e) => error_lines(&e),
    })
}
