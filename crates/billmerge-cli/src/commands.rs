use anyhow::Result;
use comfy_table::Table;

use billmerge_cli::pipeline::{MergeRequest, run_pipeline};
use billmerge_cli::types::MergeResult;
use billmerge_model::{AddressDuplicationMode, AddressField, FriendlyNameMode, ProcessingOptions};

use crate::cli::MergeArgs;
use crate::summary::{apply_table_style, header_cell};

pub fn run_fields() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Mode"),
        header_cell("Synonyms"),
        header_cell("Description"),
    ]);
    apply_table_style(&mut table);
    for field in AddressField::ALL {
        table.add_row(vec![
            field.name().to_string(),
            field.resolution_mode().to_string(),
            field.synonyms().join(", "),
            field.description().to_string(),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_merge(args: &MergeArgs) -> Result<MergeResult> {
    let options = ProcessingOptions::new()
        .with_address_duplication(if args.no_address_duplicates {
            AddressDuplicationMode::Skip
        } else {
            AddressDuplicationMode::Emit
        })
        .with_friendly_names(if args.no_name_backfill {
            FriendlyNameMode::Skip
        } else {
            FriendlyNameMode::Backfill
        });

    let request = MergeRequest::select(
        args.input_dir.as_deref(),
        args.output.as_deref(),
        args.dry_run,
    )?
    .with_report(args.report.clone())
    .with_options(options);

    run_pipeline(&request)
}
