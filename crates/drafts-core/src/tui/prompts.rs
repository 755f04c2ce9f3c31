//! The interactive scaffolding sequence
//!
//! Five steps, asked in order; the first two are conditional. Each
//! conditional step is guarded by a predicate over the answers collected so
//! far, evaluated immediately before the prompt would run.

use crate::templates::{self, ManifestPatch, PackageInfo};
use crate::validate;
use crate::workspace;
use crate::Cancelled;
use anyhow::Result;
use std::io;
use std::path::{Path, PathBuf};

/// CLI arguments for the create flow
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    /// Local directory to use for templates instead of the installed set
    pub template_dir: Option<PathBuf>,
}

/// Answers gathered from one prompt sequence. Lives for a single run.
#[derive(Debug, Clone)]
pub struct CollectedAnswers {
    /// Present when the user opted to create a new drafts workspace root
    pub drafts_dir_name: Option<String>,
    pub demo_name: String,
    pub demo_description: String,
    pub template_path: PathBuf,
}

/// Translate a prompt result, mapping the user aborting into [`Cancelled`].
fn prompted<T>(result: io::Result<T>) -> Result<T> {
    result.map_err(|err| {
        if err.kind() == io::ErrorKind::Interrupted {
            anyhow::Error::new(Cancelled)
        } else {
            err.into()
        }
    })
}

/// Run the interactive scaffolding flow end to end.
pub fn run(args: CreateArgs) -> Result<()> {
    cliclack::intro("playground-drafts")?;

    // Step 0: discover the selectable templates.
    let templates_root = match &args.template_dir {
        Some(dir) => {
            cliclack::log::info(format!("Using templates from {}", dir.display()))?;
            dir.clone()
        }
        None => templates::templates_root()?,
    };
    let choices = templates::list_templates(&templates_root)?;
    if choices.is_empty() {
        anyhow::bail!("No templates found in {}", templates_root.display());
    }

    let in_drafts = workspace::in_drafts_workspace();
    if in_drafts {
        cliclack::log::info("Already inside a drafts workspace")?;
    }

    let answers = collect(&choices, in_drafts)?;

    // Bootstrap the workspace root first so the demo lands inside it.
    let drafts_path = match &answers.drafts_dir_name {
        Some(dir_name) => {
            let path = PathBuf::from(dir_name);
            workspace::init_drafts_workspace(&path)?;
            path
        }
        None => PathBuf::new(),
    };

    let demo_path = drafts_path.join(&answers.demo_name);
    templates::materialize_package(
        &demo_path,
        &answers.template_path,
        &ManifestPatch {
            name: Some(format!("drafts-{}", answers.demo_name)),
            description: Some(answers.demo_description.clone()),
        },
    )?;

    print_next_steps(&demo_path)?;

    Ok(())
}

/// Gather the answers for one scaffolding run.
fn collect(choices: &[PackageInfo], in_drafts: bool) -> Result<CollectedAnswers> {
    // Step 1: offered only outside an existing drafts workspace.
    let create_drafts = if in_drafts {
        false
    } else {
        prompted(
            cliclack::confirm("Not in a drafts workspace. Create one?")
                .initial_value(true)
                .interact(),
        )?
    };

    // Step 2: skipped when the user declined step 1.
    let drafts_dir_name = if create_drafts {
        let name: String = prompted(
            cliclack::input("Drafts folder name")
                .default_input("drafts")
                .validate(|input: &String| validate::dir_name_free(input))
                .interact(),
        )?;
        Some(name)
    } else {
        None
    };

    // Step 3: inside a workspace the demo name doubles as its package
    // name, so both validators apply.
    let demo_name: String = if in_drafts {
        let check = validate::all_of(validate::dir_name_free, validate::package_name);
        prompted(
            cliclack::input("Demo name")
                .validate(move |input: &String| check(input))
                .interact(),
        )?
    } else {
        prompted(
            cliclack::input("Demo name")
                .validate(|input: &String| validate::dir_name_free(input))
                .interact(),
        )?
    };

    // Step 4: free text, empty allowed.
    let demo_description: String = prompted(
        cliclack::input("Description")
            .placeholder("What this demo shows")
            .default_input("")
            .interact(),
    )?;

    // Step 5: template choice - label is the template name, hint its
    // description, value the catalog index.
    let mut select = cliclack::select("Select a template");
    for (idx, template) in choices.iter().enumerate() {
        select = select.item(idx, &template.name, &template.description);
    }
    let selected: usize = prompted(select.interact())?;
    let template_path = choices[selected].path.clone();

    Ok(CollectedAnswers {
        drafts_dir_name,
        demo_name,
        demo_description,
        template_path,
    })
}

/// Print the follow-up commands after a successful scaffold.
fn print_next_steps(demo_path: &Path) -> Result<()> {
    cliclack::outro("finished")?;

    println!("cd {}", demo_path.display());
    println!("yarn");

    Ok(())
}
