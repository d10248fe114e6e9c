use {
  anyhow::{Context, ensure},
  crossterm::style::Stylize,
  reqwest::StatusCode,
  std::{
    backtrace::BacktraceStatus,
    io::{self, IsTerminal},
    process,
  },
  story_spoiler::{
    CREATED_MESSAGE, Client, Config, DELETED_MESSAGE, EDITED_MESSAGE,
    MISSING_SPOILER_MESSAGE, Result, Story, UNDELETABLE_MESSAGE,
  },
  uuid::Uuid,
};

async fn run() -> Result {
  let config = Config::from_env();

  let client = Client::authenticate(&config)
    .await
    .with_context(|| format!("could not authenticate against {}", config.base_url))?;

  println!("authenticated against {}", config.base_url);

  let created = client
    .create_story(&Story::new("Test Story Spoiler", "This is a test story."))
    .await?;

  ensure!(
    created.status == StatusCode::CREATED,
    "create returned {} instead of 201",
    created.status
  );

  ensure!(
    created.body.msg.as_deref() == Some(CREATED_MESSAGE),
    "create replied with {:?}",
    created.body.msg
  );

  let id = created
    .body
    .story_id
    .filter(|id| !id.is_empty())
    .context("create did not return a story id")?;

  println!("created story {id}");

  let edited = client
    .edit_story(
      &id,
      &Story::new("Edited Test Story Spoiler", "Updated spoiler description."),
    )
    .await?;

  ensure!(
    edited.status == StatusCode::OK,
    "edit returned {} instead of 200",
    edited.status
  );

  ensure!(
    edited.body.msg.as_deref() == Some(EDITED_MESSAGE),
    "edit replied with {:?}",
    edited.body.msg
  );

  println!("edited story {id}");

  let listed = client.list_stories().await?;

  ensure!(
    listed.status == StatusCode::OK,
    "list returned {} instead of 200",
    listed.status
  );

  ensure!(!listed.body.is_empty(), "the story list came back empty");

  println!("listed {} stories", listed.body.len());

  let deleted = client.delete_story(&id).await?;

  ensure!(
    deleted.status == StatusCode::OK,
    "delete returned {} instead of 200",
    deleted.status
  );

  ensure!(
    deleted.body.msg.as_deref() == Some(DELETED_MESSAGE),
    "delete replied with {:?}",
    deleted.body.msg
  );

  println!("deleted story {id}");

  let incomplete = client
    .create_story(&Story {
      description: None,
      title: None,
      url: Some(String::new()),
    })
    .await?;

  ensure!(
    incomplete.status == StatusCode::BAD_REQUEST,
    "create without required fields returned {} instead of 400",
    incomplete.status
  );

  println!("create without required fields rejected");

  let unknown = Uuid::new_v4().to_string();

  let missing_edit = client
    .edit_story(
      &unknown,
      &Story::new("Non-existent Story", "Should not exist"),
    )
    .await?;

  ensure!(
    missing_edit.status == StatusCode::NOT_FOUND,
    "edit of unknown id returned {} instead of 404",
    missing_edit.status
  );

  ensure!(
    missing_edit.body.msg_contains(MISSING_SPOILER_MESSAGE),
    "edit of unknown id replied with {:?}",
    missing_edit.body.msg
  );

  println!("edit of unknown id {unknown} rejected");

  let missing_delete = client.delete_story(&unknown).await?;

  ensure!(
    missing_delete.status == StatusCode::BAD_REQUEST,
    "delete of unknown id returned {} instead of 400",
    missing_delete.status
  );

  ensure!(
    missing_delete.body.msg_contains(UNDELETABLE_MESSAGE),
    "delete of unknown id replied with {:?}",
    missing_delete.body.msg
  );

  println!("delete of unknown id {unknown} rejected");

  println!("all checks passed");

  Ok(())
}

#[tokio::main]
async fn main() {
  if let Err(error) = run().await {
    let use_color = io::stderr().is_terminal();

    if use_color {
      eprintln!("{} {error}", "error:".bold().red());
    } else {
      eprintln!("error: {error}");
    }

    for (i, error) in error.chain().skip(1).enumerate() {
      if i == 0 {
        eprintln!();

        if use_color {
          eprintln!("{}", "because:".bold().red());
        } else {
          eprintln!("because:");
        }
      }

      if use_color {
        eprintln!("{} {error}", "-".bold().red());
      } else {
        eprintln!("- {error}");
      }
    }

    let backtrace = error.backtrace();

    if backtrace.status() == BacktraceStatus::Captured {
      if use_color {
        eprintln!("{}", "backtrace:".bold().red());
      } else {
        eprintln!("backtrace:");
      }

      eprintln!("{backtrace}");
    }

    process::exit(1);
  }
}
