//! Post CLI commands

use anyhow::Result;
use clap::Subcommand;

use super::output::Output;
use crate::storage::Site;

#[derive(Subcommand)]
pub enum PostCommands {
    /// List all posts, most recent first
    List,

    /// Show one post, including its body
    Show {
        /// Post slug (the file name without extension)
        slug: String,
    },

    /// List all post slugs
    Slugs,
}

pub fn run(cmd: PostCommands, output: &Output) -> Result<()> {
    match cmd {
        PostCommands::List => list_posts(output),
        PostCommands::Show { slug } => show_post(output, &slug),
        PostCommands::Slugs => list_slugs(output),
    }
}

fn list_posts(output: &Output) -> Result<()> {
    let site = Site::open_current()?;
    let store = site.content_store();

    output.verbose_ctx(
        "post",
        &format!("Listing posts from: {}", store.dir().display()),
    );

    let posts = store.list_posts();

    if output.is_json() {
        output.data(&posts);
    } else if posts.is_empty() {
        println!("No posts found.");
    } else {
        println!("{:<12} {:<28} {:<14} TITLE", "DATE", "SLUG", "READING");
        println!("{}", "-".repeat(72));
        for post in &posts {
            let date = if post.date.is_empty() {
                "-"
            } else {
                post.date.as_str()
            };
            println!(
                "{:<12} {:<28} {:<14} {}",
                date, post.slug, post.reading_time, post.title
            );
        }
        println!();
        println!("{} post(s)", posts.len());
    }

    Ok(())
}

fn show_post(output: &Output, slug: &str) -> Result<()> {
    let site = Site::open_current()?;
    let store = site.content_store();

    let post = store
        .get_post(slug)
        .ok_or_else(|| anyhow::anyhow!("Post not found: {}", slug))?;

    if output.is_json() {
        output.data(&post);
    } else {
        println!("{}", post.meta.title);
        if !post.meta.date.is_empty() {
            println!("{} · {}", post.meta.date, post.meta.reading_time);
        } else {
            println!("{}", post.meta.reading_time);
        }
        if !post.meta.tags.is_empty() {
            println!("tags: {}", post.meta.tags.join(", "));
        }
        if !post.meta.excerpt.is_empty() {
            println!();
            println!("{}", post.meta.excerpt);
        }
        println!();
        println!("{}", post.content.trim_end());
    }

    Ok(())
}

fn list_slugs(output: &Output) -> Result<()> {
    let site = Site::open_current()?;
    let slugs = site.content_store().list_slugs();

    if output.is_json() {
        output.data(&slugs);
    } else if slugs.is_empty() {
        println!("No posts found.");
    } else {
        for slug in &slugs {
            println!("{}", slug);
        }
    }

    Ok(())
}
