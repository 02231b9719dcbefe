use crate::advisory_generation::domain::{
    AdvisoryMap, DataSource, OvalFeed, VendorCatalog, VendorCatalogRecord,
};
use crate::advisory_generation::services::{AdvisoryBuilder, AdvisoryMerger, ReferenceResolver};
use crate::application::dto::{UpdateRequest, UpdateResponse};
use crate::ports::outbound::{AdvisoryStore, FeedReader, ProgressReporter};
use crate::shared::Result;
use anyhow::Context;
use chrono::{DateTime, Utc};
use std::path::Path;

/// Name of the top-level bucket and the source tag for catalog details
pub const ROOT_BUCKET: &str = DataSource::ALT_ID;

/// Everything one run accumulates before persisting
#[derive(Debug, Default)]
struct RunState {
    advisories: AdvisoryMap,
    catalog: VendorCatalog,
    branches: usize,
    products: usize,
    definitions: usize,
    skipped_unaffected: usize,
}

/// UpdateAdvisoriesUseCase - rebuilds the advisory database from an OVAL checkout
///
/// Each run starts from empty state, walks every branch and product in sorted
/// order, and persists the merged result in a single batch. Any error aborts
/// the run before anything is written.
///
/// # Type Parameters
/// * `FR` - FeedReader implementation
/// * `S` - AdvisoryStore implementation
/// * `PR` - ProgressReporter implementation
pub struct UpdateAdvisoriesUseCase<FR, S, PR> {
    feed_reader: FR,
    store: S,
    progress_reporter: PR,
}

impl<FR, S, PR> UpdateAdvisoriesUseCase<FR, S, PR>
where
    FR: FeedReader,
    S: AdvisoryStore,
    PR: ProgressReporter,
{
    pub fn new(feed_reader: FR, store: S, progress_reporter: PR) -> Self {
        Self {
            feed_reader,
            store,
            progress_reporter,
        }
    }

    /// Executes the update
    ///
    /// # Errors
    /// Fails on the first I/O, decode, reference, or storage error, with the
    /// branch and product that caused it in the context chain.
    pub fn execute(&self, request: UpdateRequest) -> Result<UpdateResponse> {
        let oval_root = request.oval_root();
        self.progress_reporter
            .report(&format!("📖 Reading OVAL feeds from: {}", oval_root.display()));

        let state = self.collect(&oval_root)?;

        let skipped_empty_ids = state.catalog.skipped_empty_ids();
        if skipped_empty_ids > 0 {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: {} vendor catalog record(s) had no identifier and were skipped.",
                skipped_empty_ids
            ));
        }

        let mut response = UpdateResponse {
            branches: state.branches,
            products: state.products,
            definitions: state.definitions,
            skipped_unaffected: state.skipped_unaffected,
            buckets: state.advisories.len(),
            entries: state.advisories.values().map(|a| a.entries.len()).sum(),
            catalog_records: state.catalog.len(),
            skipped_empty_ids,
            persisted: false,
        };

        if request.dry_run {
            self.progress_reporter
                .report_completion(&format!("🔍 Dry run, nothing written: {}", response.summary()));
            return Ok(response);
        }

        self.persist(&state.advisories, state.catalog.into_records(), Utc::now())?;
        response.persisted = true;

        self.progress_reporter
            .report_completion(&format!("✅ Update complete: {}", response.summary()));
        Ok(response)
    }

    /// Walks every branch and product, folding results into fresh run state
    fn collect(&self, oval_root: &Path) -> Result<RunState> {
        let mut state = RunState::default();

        let branches = self
            .feed_reader
            .branches(oval_root)
            .context("Failed to get directory branch list")?;

        let mut work = Vec::new();
        for branch in &branches {
            let products = self
                .feed_reader
                .products(oval_root, branch)
                .with_context(|| format!("Failed to get directory products list for {}", branch))?;
            work.extend(products.into_iter().map(|product| (branch.as_str(), product)));
        }
        state.branches = branches.len();

        let total = work.len();
        let mut current_branch = None;
        for (index, (branch, product)) in work.iter().enumerate() {
            if current_branch != Some(*branch) {
                self.progress_reporter.report(&format!("Parsing {}", branch));
                current_branch = Some(*branch);
            }
            self.progress_reporter.report_progress(
                index + 1,
                total,
                Some(&format!("{}/{}", branch, product)),
            );

            self.feed_reader
                .read_product(oval_root, branch, product)
                .and_then(|feed| Self::process_product(&feed, &mut state))
                .with_context(|| format!("Failed to parse product OVAL: {}/{}", branch, product))?;
            state.products += 1;
        }

        Ok(state)
    }

    /// Resolves, builds, and merges one product directory into the run state
    fn process_product(feed: &OvalFeed, state: &mut RunState) -> Result<()> {
        let facts = ReferenceResolver::resolve(&feed.objects, &feed.states, &feed.tests)?;
        let outcome = AdvisoryBuilder::build(&feed.definitions, &facts, &mut state.catalog);

        state.definitions += outcome.definitions;
        state.skipped_unaffected += outcome.skipped_unaffected;
        AdvisoryMerger::merge(&mut state.advisories, outcome.entries);

        Ok(())
    }

    /// Replaces the previous ALT content with this run's data source, vendor
    /// catalog, and advisories in one batch
    fn persist(
        &self,
        advisories: &AdvisoryMap,
        catalog: Vec<VendorCatalogRecord>,
        updated_at: DateTime<Utc>,
    ) -> Result<()> {
        let source = DataSource::alt(updated_at);

        self.store
            .batch_update(&mut |tx| {
                tx.delete_bucket(&[ROOT_BUCKET])
                    .context("Failed to clear previous advisories")?;
                tx.delete_vulnerability_details(ROOT_BUCKET)
                    .context("Failed to clear previous vendor details")?;

                tx.put_data_source(ROOT_BUCKET, &source)
                    .context("Failed to put data source")?;

                for record in &catalog {
                    tx.put_vulnerability_detail(&record.id, ROOT_BUCKET, record)
                        .with_context(|| format!("Failed to save ALT vendor vulnerability {}", record.id))?;
                    tx.put_vulnerability_id(&record.id)
                        .with_context(|| format!("Failed to save vulnerability ID {}", record.id))?;
                }

                for (key, advisory) in advisories {
                    tx.put_advisory_detail(
                        &key.vulnerability_id,
                        &key.package_name,
                        &[ROOT_BUCKET],
                        advisory,
                    )
                    .with_context(|| format!("Failed to save ALT OVAL advisory {}", key))?;
                    tx.put_vulnerability_id(&key.vulnerability_id)
                        .with_context(|| format!("Failed to save vulnerability ID {}", key.vulnerability_id))?;
                }

                Ok(())
            })
            .context("Batch update failed")
    }
}
