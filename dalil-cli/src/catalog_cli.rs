//! Dalil catalog commands
//!
//! The terminal counterpart of the catalog screen: a search box, facet
//! selectors, a sort choice, the result list, and the detail overlay.

use anyhow::{Context, Result};
use clap::Subcommand;
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

use dalil_core::catalog::{Catalog, CatalogRecord, RecordKind};
use dalil_core::detail::{DetailBody, DetailDocument, DetailSynthesizer, MetadataEntry};
use dalil_core::filter::{facet_options, Facet, FilterEngine, FilterUpdate, SortSpec};
use dalil_core::DalilConfig;

#[derive(Subcommand, Debug)]
pub enum CatalogCommand {
    /// Search and filter the catalog
    Search {
        /// Search query (matches title, description, category)
        query: Option<String>,

        /// Secondary quick-search text, combined with the query
        #[clap(long)]
        quick: Option<String>,

        /// Filter by type ("all" for any)
        #[clap(long = "type")]
        record_type: Option<String>,

        /// Filter by status ("all" for any)
        #[clap(long)]
        status: Option<String>,

        /// Filter by digitization level: yes, partially, no ("all" for any)
        #[clap(long)]
        digitization: Option<String>,

        /// Sort as field[:asc|desc], e.g. popularity:desc
        #[clap(long)]
        sort: Option<SortSpec>,

        /// Output results as JSON
        #[clap(long)]
        json: bool,
    },

    /// Show the detailed view of a record
    Show {
        /// Record id
        id: u64,

        /// Output as JSON
        #[clap(long)]
        json: bool,
    },

    /// Trigger an action on a record and print the resulting event
    Action {
        /// Record id
        id: u64,

        /// Action key (download, share, print, favorite, locate, estimate_cost)
        key: String,
    },

    /// List the options available for each facet
    Facets,
}

impl CatalogCommand {
    pub fn execute(self, catalog: Catalog, config: &DalilConfig) -> Result<()> {
        match self {
            CatalogCommand::Search {
                query,
                quick,
                record_type,
                status,
                digitization,
                sort,
                json,
            } => {
                let mut engine = FilterEngine::new(catalog);
                if let Some(query) = query {
                    engine.set_search_text(query);
                }
                if let Some(quick) = quick {
                    engine.set_quick_search_text(quick);
                }
                engine.apply_filter_update(&FilterUpdate {
                    record_type,
                    status,
                    digitization,
                });
                engine.apply_sort(sort);
                execute_search(&engine, json)
            }
            CatalogCommand::Show { id, json } => {
                let synthesizer = DetailSynthesizer::new(config.detail_config());
                execute_show(&catalog, &synthesizer, id, json)
            }
            CatalogCommand::Action { id, key } => {
                let synthesizer = DetailSynthesizer::new(config.detail_config());
                execute_action(&catalog, &synthesizer, id, &key)
            }
            CatalogCommand::Facets => execute_facets(),
        }
    }
}

/// Table row for search results
#[derive(Tabled)]
struct SearchResultRow {
    #[tabled(rename = "ID")]
    id: u64,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Digitized")]
    digitization: &'static str,
    #[tabled(rename = "Duration")]
    duration: String,
}

impl From<&CatalogRecord> for SearchResultRow {
    fn from(record: &CatalogRecord) -> Self {
        Self {
            id: record.id,
            title: truncate(&record.title, 40),
            category: record.category.clone(),
            status: record.status.clone(),
            digitization: record.digitization.label(),
            duration: record.duration.clone().unwrap_or_else(|| "-".to_string()),
        }
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() > max_chars {
        let kept: String = text.chars().take(max_chars - 3).collect();
        format!("{kept}...")
    } else {
        text.to_string()
    }
}

fn execute_search(engine: &FilterEngine, json_output: bool) -> Result<()> {
    let results = engine.visible_records();

    if json_output {
        let output = serde_json::json!({
            "count": engine.count(),
            "selection": engine.selection(),
            "sort": engine.sort().map(|s| s.to_string()),
            "records": results,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{} {}", engine.count(), results_label(engine.catalog()));
    if results.is_empty() {
        return Ok(());
    }

    let rows: Vec<SearchResultRow> = results.into_iter().map(SearchResultRow::from).collect();
    let table = Table::new(&rows)
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()))
        .to_string();

    println!("\n{table}");
    Ok(())
}

/// Result-count label matching what the catalog holds
fn results_label(catalog: &Catalog) -> &'static str {
    let has = |kind: RecordKind| catalog.records().iter().any(|r| r.kind == kind);
    match (has(RecordKind::Procedure), has(RecordKind::LegalText)) {
        (false, true) => "texte(s) trouvé(s)",
        (true, true) => "résultat(s) trouvé(s)",
        _ => "procédure(s) trouvée(s)",
    }
}

fn find_record(catalog: &Catalog, id: u64) -> Result<&CatalogRecord> {
    catalog
        .get(id)
        .with_context(|| format!("Record {id} not found in catalog"))
}

fn execute_show(
    catalog: &Catalog,
    synthesizer: &DetailSynthesizer,
    id: u64,
    json_output: bool,
) -> Result<()> {
    let record = find_record(catalog, id)?;
    let doc = synthesizer.open_detail(record);

    if json_output {
        println!("{}", serde_json::to_string_pretty(&doc)?);
    } else {
        print_document(&doc);
    }
    Ok(())
}

fn print_document(doc: &DetailDocument) {
    println!();
    println!("{}", doc.title);
    println!("{}", "=".repeat(doc.title.chars().count()));

    for section in &doc.metadata {
        println!();
        println!("{}:", section.heading);
        for entry in &section.entries {
            match entry {
                MetadataEntry::Field(field) => println!("  {}: {}", field.label, field.value),
                MetadataEntry::Item { text } => println!("  - {text}"),
            }
        }
    }

    println!();
    match &doc.body {
        DetailBody::Procedure {
            heading,
            description,
            steps_heading,
            steps,
        } => {
            println!("{heading}:");
            println!("  {description}");
            println!();
            println!("{steps_heading}:");
            for step in steps {
                println!("  {}. {}", step.number, step.title);
                println!("     {}", step.detail);
            }
        }
        DetailBody::LegalText { heading, chapters } => {
            println!("{heading}:");
            for chapter in chapters {
                println!();
                println!("  {}", chapter.title);
                for article in &chapter.articles {
                    for (i, paragraph) in article.paragraphs.iter().enumerate() {
                        if i == 0 {
                            println!("  {} : {}", article.label, paragraph);
                        } else {
                            println!("  {paragraph}");
                        }
                    }
                }
            }
        }
    }

    println!();
    println!("Actions:");
    for action in &doc.actions {
        println!("  {:<14} {}", action.key.as_str(), action.label);
    }
}

fn execute_action(
    catalog: &Catalog,
    synthesizer: &DetailSynthesizer,
    id: u64,
    key: &str,
) -> Result<()> {
    let record = find_record(catalog, id)?;
    let event = synthesizer.invoke_action(record, key)?;
    println!("{}", serde_json::to_string_pretty(&event)?);
    Ok(())
}

fn execute_facets() -> Result<()> {
    for facet in Facet::ALL {
        println!("{facet}:");
        for option in facet_options(facet) {
            println!("  {:<10} {}", option.id, option.label);
        }
    }
    Ok(())
}
