use crate::core::filters::{SortDirection, SortField};
use crate::core::workflow::{SearchOutcome, SearchWorkflow};
use crate::models::Dog;
use std::io::{self, BufRead, Write};

/// How the search view was left
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    Logout,
    Quit,
}

const HELP: &str = "\
Commands:
  breeds                     list available breeds
  breed add|rm <name>        edit the breed filter
  breed clear                clear the breed filter
  age min|max <1-25>         set an age bound
  age clear                  drop both age bounds
  zip add|rm <zip>           edit the zip filter (max 6)
  zip find <city>            suggest zips by city name
  sort <breed|name|age> <asc|desc>
  search                     run a search with the current filters
  next / prev                paginate
  fav <dog-id>               toggle a favorite
  favs                       list favorites
  match                      generate a match from favorites
  dismiss                    close the match card
  logout / quit";

fn render_dog<W: Write>(
    output: &mut W,
    workflow: &SearchWorkflow,
    dog: &Dog,
) -> io::Result<()> {
    let marker = if workflow.favorites().contains(&dog.id) {
        "*"
    } else {
        " "
    };
    write!(
        output,
        "{} [{}] {}, age {}, {}",
        marker, dog.id, dog.name, dog.age, dog.breed
    )?;
    // A missing location lookup renders as absent, not as an error
    if let Some(loc) = workflow.location_for(&dog.zip_code) {
        write!(output, " ({}, {})", loc.city, loc.state)?;
    }
    writeln!(output)
}

fn render_results<W: Write>(output: &mut W, workflow: &SearchWorkflow) -> io::Result<()> {
    if let Some(total) = workflow.total_results() {
        writeln!(output, "{} dogs match your filters.", total)?;
    }
    for dog in workflow.dogs() {
        render_dog(output, workflow, dog)?;
    }
    let mut nav = Vec::new();
    if workflow.prev_cursor().is_some() {
        nav.push("prev");
    }
    if workflow.next_cursor().is_some() {
        nav.push("next");
    }
    if !nav.is_empty() {
        writeln!(output, "More pages: {}", nav.join(", "))?;
    }
    Ok(())
}

fn render_match<W: Write>(output: &mut W, workflow: &SearchWorkflow) -> io::Result<()> {
    if let Some(dog) = workflow.matched_dog() {
        writeln!(output, "Your perfect match!")?;
        render_dog(output, workflow, dog)?;
    }
    Ok(())
}

async fn handle_search<W: Write>(
    output: &mut W,
    workflow: &mut SearchWorkflow,
) -> io::Result<()> {
    match workflow.search().await {
        Ok(SearchOutcome::Applied) => render_results(output, workflow),
        Ok(SearchOutcome::Superseded) => Ok(()),
        // Already logged by the workflow; previous results remain shown
        Err(_) => writeln!(output, "Search failed; previous results are kept."),
    }
}

async fn handle_page<W: Write>(
    output: &mut W,
    workflow: &mut SearchWorkflow,
    forward: bool,
) -> io::Result<()> {
    let result = if forward {
        workflow.next_page().await
    } else {
        workflow.prev_page().await
    };
    match result {
        Ok(Some(SearchOutcome::Applied)) => render_results(output, workflow),
        Ok(Some(SearchOutcome::Superseded)) => Ok(()),
        Ok(None) => writeln!(output, "No such page."),
        Err(_) => writeln!(output, "Search failed; previous results are kept."),
    }
}

async fn handle_match<W: Write>(
    output: &mut W,
    workflow: &mut SearchWorkflow,
) -> io::Result<()> {
    if workflow.favorites().is_empty() {
        return writeln!(output, "Favorite at least one dog first.");
    }
    match workflow.request_match().await {
        Ok(Some(_)) => render_match(output, workflow),
        Ok(None) => Ok(()),
        Err(e) => {
            tracing::error!("Failed to generate match: {}", e);
            writeln!(output, "Could not generate a match right now.")
        }
    }
}

fn handle_age<W: Write>(
    output: &mut W,
    workflow: &mut SearchWorkflow,
    which: &str,
    value: &str,
) -> io::Result<()> {
    let accepted = match (which, value.parse::<u8>()) {
        ("min", Ok(age)) => workflow.filters.set_age_min(age),
        ("max", Ok(age)) => workflow.filters.set_age_max(age),
        _ => false,
    };
    if !accepted {
        writeln!(output, "Age must be a number between 1 and 25.")?;
    }
    Ok(())
}

/// Search & selection view: maps commands onto the workflow
pub async fn run<R: BufRead, W: Write>(
    workflow: &mut SearchWorkflow,
    input: &mut R,
    output: &mut W,
) -> io::Result<Exit> {
    writeln!(
        output,
        "Search the catalog ({} breeds known). Type 'help' for commands.",
        workflow.breeds().len()
    )?;

    let mut line = String::new();
    loop {
        write!(output, "> ")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(Exit::Quit);
        }

        let tokens: Vec<&str> = line.split_whitespace().collect();
        match tokens.as_slice() {
            [] => {}
            ["help"] => writeln!(output, "{}", HELP)?,
            ["breeds"] => {
                for breed in workflow.breeds() {
                    writeln!(output, "{}", breed)?;
                }
            }
            ["breed", "add", rest @ ..] if !rest.is_empty() => {
                workflow.filters.add_breed(rest.join(" "));
            }
            ["breed", "rm", rest @ ..] if !rest.is_empty() => {
                workflow.filters.remove_breed(&rest.join(" "));
            }
            ["breed", "clear"] => workflow.filters.clear_breeds(),
            ["age", "min", value] => handle_age(output, workflow, "min", value)?,
            ["age", "max", value] => handle_age(output, workflow, "max", value)?,
            ["age", "clear"] => {
                workflow.filters.clear_age_min();
                workflow.filters.clear_age_max();
            }
            ["zip", "add", zip] => {
                if !workflow.filters.add_zip_code(*zip) {
                    // Cap overflow and duplicates are ignored without error
                    writeln!(output, "Zip not added (limit of 6, no duplicates).")?;
                }
            }
            ["zip", "rm", zip] => workflow.filters.remove_zip_code(zip),
            ["zip", "find", rest @ ..] if !rest.is_empty() => {
                let suggestions = workflow.suggest_zip_codes(&rest.join(" ")).await;
                if suggestions.is_empty() {
                    writeln!(output, "No suggestions.")?;
                } else {
                    writeln!(output, "Suggested zips: {}", suggestions.join(", "))?;
                }
            }
            ["sort", field, direction] => {
                match (SortField::parse(field), SortDirection::parse(direction)) {
                    (Some(f), Some(d)) => {
                        workflow.filters.sort_field = f;
                        workflow.filters.sort_direction = d;
                    }
                    _ => writeln!(output, "Usage: sort <breed|name|age> <asc|desc>")?,
                }
            }
            ["search"] => handle_search(output, workflow).await?,
            ["next"] => handle_page(output, workflow, true).await?,
            ["prev"] => handle_page(output, workflow, false).await?,
            ["fav", id] => workflow.toggle_favorite(*id),
            ["favs"] => {
                writeln!(output, "{} favorites: {}", workflow.favorites().len(),
                    workflow.favorites().ids().join(", "))?;
            }
            ["match"] => handle_match(output, workflow).await?,
            ["dismiss"] => workflow.dismiss_match(),
            ["logout"] => return Ok(Exit::Logout),
            ["quit"] | ["exit"] => return Ok(Exit::Quit),
            _ => writeln!(output, "Unknown command; type 'help'.")?,
        }
    }
}
