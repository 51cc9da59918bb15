//! Work entry management: create, show, edit, delete, and toggle entries.
//!
//! The punch-hours invariant is maintained here: every create or edit that
//! touches a punch field goes through `Task::sync_hours`, so a complete
//! punch pair always wins over a manually supplied hours value.

use crate::db::tasks::Tasks;
use crate::libs::messages::Message;
use crate::libs::task::{self, Task, DATE_FORMAT};
use crate::libs::view::View;
use crate::{msg_bail_anyhow, msg_print, msg_success};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::Args;

#[derive(Debug, Args)]
pub struct TaskArgs {
    /// Title of the new entry
    title: Option<String>,

    #[arg(short = 'c', long, help = "Entry description")]
    description: Option<String>,

    #[arg(short, long, help = "Employer the entry belongs to")]
    employer: Option<String>,

    #[arg(long, help = "Punch-in time, e.g. '9:00 AM'")]
    punch_in: Option<String>,

    #[arg(long, help = "Punch-out time, e.g. '5:30 PM'")]
    punch_out: Option<String>,

    #[arg(long, help = "Hours spent; overridden when both punch times are set")]
    hours: Option<f64>,

    #[arg(short, long, help = "Entry date (YYYY-MM-DD), defaults to today")]
    date: Option<NaiveDate>,

    #[arg(long, help = "Show entries for the date")]
    show: bool,

    #[arg(long, value_name = "ID", help = "Edit an existing entry")]
    edit: Option<String>,

    #[arg(long, value_name = "ID", help = "Delete an entry")]
    delete: Option<String>,

    #[arg(long, value_name = "ID", help = "Toggle an entry's completion")]
    toggle: Option<String>,
}

pub fn cmd(args: TaskArgs) -> Result<()> {
    let mut tasks = Tasks::new()?;
    let date = args.date.unwrap_or_else(|| Local::now().date_naive());

    if args.show {
        return show(&mut tasks, date);
    }
    if let Some(id) = &args.delete {
        return delete(&mut tasks, id);
    }
    if let Some(id) = &args.toggle {
        return toggle(&mut tasks, id);
    }
    if let Some(id) = args.edit.clone() {
        return edit(&mut tasks, &id, args);
    }

    create(&mut tasks, date, args)
}

fn create(tasks: &mut Tasks, date: NaiveDate, args: TaskArgs) -> Result<()> {
    let title = match args.title.as_deref().map(str::trim) {
        Some(title) if !title.is_empty() => title.to_string(),
        _ => msg_bail_anyhow!(Message::TaskTitleRequired),
    };

    if let Some(hours) = args.hours {
        task::validate_hours(hours)?;
    }

    let mut task = Task::new(
        &title,
        args.description.as_deref().unwrap_or(""),
        args.employer.as_deref().unwrap_or(""),
        date,
    );
    task.punch_in = args.punch_in;
    task.punch_out = args.punch_out;
    task.hours_spent = args.hours.unwrap_or(0.0);
    task.sync_hours();

    tasks.insert(&task)?;
    msg_success!(Message::TaskCreated(task.title));

    Ok(())
}

fn edit(tasks: &mut Tasks, id: &str, args: TaskArgs) -> Result<()> {
    let Some(mut task) = tasks.get_by_id(id)? else {
        msg_bail_anyhow!(Message::TaskNotFound(id.to_string()));
    };

    if let Some(title) = &args.title {
        if title.trim().is_empty() {
            msg_bail_anyhow!(Message::TaskTitleRequired);
        }
        task.title = title.trim().to_string();
    }
    if let Some(description) = args.description {
        task.description = description;
    }
    if let Some(employer) = args.employer {
        task.employer = employer;
    }
    if let Some(punch_in) = args.punch_in {
        task.punch_in = Some(punch_in);
    }
    if let Some(punch_out) = args.punch_out {
        task.punch_out = Some(punch_out);
    }
    if let Some(hours) = args.hours {
        task::validate_hours(hours)?;
        task.hours_spent = hours;
    }
    if let Some(date) = args.date {
        task.date = date.format(DATE_FORMAT).to_string();
    }
    task.sync_hours();

    tasks.update(&task)?;
    msg_success!(Message::TaskUpdated(task.title));

    Ok(())
}

fn delete(tasks: &mut Tasks, id: &str) -> Result<()> {
    if tasks.delete(id)? == 0 {
        msg_bail_anyhow!(Message::TaskNotFound(id.to_string()));
    }
    msg_success!(Message::TaskDeleted(id.to_string()));

    Ok(())
}

fn toggle(tasks: &mut Tasks, id: &str) -> Result<()> {
    let Some(task) = tasks.get_by_id(id)? else {
        msg_bail_anyhow!(Message::TaskNotFound(id.to_string()));
    };

    tasks.set_completed(id, !task.completed)?;
    msg_success!(Message::TaskCompletionSet(task.title, !task.completed));

    Ok(())
}

fn show(tasks: &mut Tasks, date: NaiveDate) -> Result<()> {
    let day_tasks = tasks.get_by_date(date)?;
    if day_tasks.is_empty() {
        msg_print!(Message::TasksNotFoundForDate(date.to_string()));
        return Ok(());
    }

    View::tasks(&day_tasks)?;
    msg_print!(Message::CompletedHoursForDay(
        date.to_string(),
        task::completed_hours(&day_tasks)
    ));

    Ok(())
}
