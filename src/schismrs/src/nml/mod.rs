// schismrs/src/nml/mod.rs

//! The SCHISM namelist set.
//!
//! [`Nml`] holds one optional section per namelist file. Every public way of
//! producing or changing an [`Nml`] validates the whole tree, section rules
//! and cross-section rules alike, before handing it back.

pub mod cosine;
pub mod ice;
pub mod icm;
pub mod mice;
pub mod param;
pub mod sediment;
pub mod wwminput;

use crate::constants::TIME_FORMAT;
use crate::error::{Advisory, Result};
use crate::period::TimeRange;
use crate::sources::DataSources;
use crate::validation::check_consistency;
use fs_err as fs;
use schismrs_namelist::schema::{self, require_equal_lengths, FieldPath, Value, Violations};
use schismrs_namelist::{schema_struct, ToNamelist, WriteOptions};
use serde_json::{json, Map};
use std::path::{Path, PathBuf};

pub use cosine::Cosine;
pub use ice::Ice;
pub use icm::Icm;
pub use mice::Mice;
pub use param::Param;
pub use sediment::Sediment;
pub use wwminput::WwmInput;

schema_struct! {
    /// A SCHISM configuration. Sections are written in declaration order.
    pub struct Nml {
        param: Option<Param>,
        ice: Option<Ice>,
        icm: Option<Icm>,
        mice: Option<Mice>,
        sediment: Option<Sediment>,
        cosine: Option<Cosine>,
        wwminput: Option<WwmInput>,
    }
}

impl Nml {
    /// Build a validated configuration from nested key-value data.
    ///
    /// Advisories raised by the cross-section rules are logged; use
    /// [`Nml::check`] to obtain them.
    pub fn build(value: Value) -> Result<Self> {
        let nml: Nml = schema::build(value)?;
        check_consistency(&nml)?;
        Ok(nml)
    }

    /// Re-run every rule against the current tree.
    pub fn check(&self) -> Result<Vec<Advisory>> {
        schema::validate(self)?;
        Ok(check_consistency(self)?)
    }

    /// Deep-merge `overrides` into the configuration.
    ///
    /// The merge happens on a copy which replaces `self` only when it passes
    /// validation; on error `self` is unchanged.
    pub fn update(&mut self, overrides: Value) -> Result<Vec<Advisory>> {
        log::debug!("Merging into SCHISM configuration: {}", overrides);
        let candidate = schema::merged(self, overrides)?;
        let advisories = check_consistency(&candidate)?;
        *self = candidate;
        Ok(advisories)
    }

    /// Set the run length and start date, and the WWM time windows when the
    /// wave model is configured.
    pub fn update_times(&mut self, period: &TimeRange) -> Result<Vec<Advisory>> {
        log::info!(
            "Setting run period {} to {} ({} days)",
            period.start(),
            period.end(),
            period.days()
        );
        let mut overrides = json!({
            "param": {
                "core": {"rnday": period.days()},
                "opt": {
                    "start_year": period.start_year(),
                    "start_month": period.start_month(),
                    "start_day": period.start_day(),
                    "start_hour": period.start_hour(),
                }
            }
        });
        if self.wwminput.is_some() {
            let window = json!({
                "begtc": period.start().format(TIME_FORMAT).to_string(),
                "endtc": period.end().format(TIME_FORMAT).to_string(),
            });
            let groups: Map<String, Value> = wwminput::TIMED_GROUPS
                .iter()
                .map(|group| (group.to_string(), window.clone()))
                .collect();
            overrides["wwminput"] = Value::Object(groups);
        }
        self.update(overrides)
    }

    /// Point the namelists at prepared forcing products.
    pub fn update_data_sources(&mut self, sources: &DataSources<'_>) -> Result<Vec<Advisory>> {
        let mut advisories = Vec::new();
        let mut overrides = Map::new();

        if let Some(wave) = sources.wave {
            let name = wave.name();
            match &self.wwminput {
                None => advisories.push(Advisory::raise(format!(
                    "No wwminput section is configured; wave product {} is ignored",
                    name
                ))),
                Some(wwm) => {
                    let current = wwm.bouc.as_ref().and_then(|bouc| bouc.filewave.as_deref());
                    if let Some(current) = current.filter(|current| *current != name) {
                        advisories.push(Advisory::raise(format!(
                            "Overriding wwminput.bouc.filewave {} with wave product {}",
                            current, name
                        )));
                    }
                    log::info!("Setting wwminput.bouc.filewave = {}", name);
                    overrides.insert("wwminput".to_string(), json!({"bouc": {"filewave": name}}));
                }
            }
        }

        if let Some(atmos) = sources.atmos {
            let current = self
                .param
                .as_ref()
                .and_then(|param| param.opt.as_ref())
                .and_then(|opt| opt.nws);
            if current != Some(2) {
                if let Some(nws) = current {
                    advisories.push(Advisory::raise(format!(
                        "Overriding param.opt.nws = {} with 2 for atmospheric product {}",
                        nws,
                        atmos.name()
                    )));
                }
                log::info!("Setting param.opt.nws = 2 for {}", atmos.name());
                overrides.insert("param".to_string(), json!({"opt": {"nws": 2}}));
            }
        }

        if !overrides.is_empty() {
            advisories.extend(self.update(Value::Object(overrides))?);
        }
        Ok(advisories)
    }

    /// Present sections, in writing order.
    pub fn sections(&self) -> Vec<&dyn ToNamelist> {
        [
            self.param.as_ref().map(|s| s as &dyn ToNamelist),
            self.ice.as_ref().map(|s| s as &dyn ToNamelist),
            self.icm.as_ref().map(|s| s as &dyn ToNamelist),
            self.mice.as_ref().map(|s| s as &dyn ToNamelist),
            self.sediment.as_ref().map(|s| s as &dyn ToNamelist),
            self.cosine.as_ref().map(|s| s as &dyn ToNamelist),
            self.wwminput.as_ref().map(|s| s as &dyn ToNamelist),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// File name and text of every present section.
    pub fn render(&self) -> Vec<(&'static str, String)> {
        let options = WriteOptions::default();
        self.sections()
            .into_iter()
            .map(|section| (section.file_name(), section.to_namelist().to_fortran_string(&options)))
            .collect()
    }

    /// Write every present section into `dir`, replacing existing files.
    pub fn write_all(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        fs::create_dir_all(dir)?;
        let options = WriteOptions {
            force: true,
            ..WriteOptions::default()
        };
        let mut written = Vec::new();
        for section in self.sections() {
            written.push(schismrs_namelist::write_into(section, dir, &options)?);
        }
        Ok(written)
    }

    pub fn param(&self) -> Option<&Param> {
        self.param.as_ref()
    }

    pub fn ice(&self) -> Option<&Ice> {
        self.ice.as_ref()
    }

    pub fn icm(&self) -> Option<&Icm> {
        self.icm.as_ref()
    }

    pub fn mice(&self) -> Option<&Mice> {
        self.mice.as_ref()
    }

    pub fn sediment(&self) -> Option<&Sediment> {
        self.sediment.as_ref()
    }

    pub fn cosine(&self) -> Option<&Cosine> {
        self.cosine.as_ref()
    }

    pub fn wwminput(&self) -> Option<&WwmInput> {
        self.wwminput.as_ref()
    }
}

/// Report every present sequence whose length differs from the first present
/// one.
pub(crate) fn require_common_length(
    path: &FieldPath,
    lengths: &[(&str, Option<usize>)],
    report: &mut Violations,
) {
    let anchor = lengths
        .iter()
        .find_map(|(name, len)| len.map(|len| (*name, len)));
    if let Some(anchor) = anchor {
        require_equal_lengths(path, anchor, lengths, report);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SchismError;
    use chrono::NaiveDate;

    fn period() -> TimeRange {
        let day = NaiveDate::from_ymd_opt(2020, 2, 21).unwrap();
        TimeRange::new(
            day.and_hms_opt(4, 0, 0).unwrap(),
            day.and_hms_opt(16, 0, 0).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_absent_sections_are_not_rendered() {
        let nml = Nml::build(json!({"param": {"core": {"dt": 150.0}}})).unwrap();
        let rendered = nml.render();
        assert_eq!(rendered.len(), 1);
        assert_eq!(rendered[0].0, "param.nml");
        assert_eq!(Nml::build(json!({})).unwrap().render().len(), 0);
    }

    #[test]
    fn test_sections_render_in_fixed_order() {
        let nml = Nml::build(json!({
            "wwminput": {"proc": {}},
            "ice": {"ice_in": {}},
            "param": {"core": {}}
        }))
        .unwrap();
        let names: Vec<&str> = nml.render().into_iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["param.nml", "ice.nml", "wwminput.nml"]);
    }

    #[test]
    fn test_empty_update_changes_nothing() {
        let mut nml = Nml::build(json!({
            "param": {"core": {"dt": 150.0}, "opt": {"nws": 2, "wtiminc": 300.0}},
            "sediment": {"sed_core": {"sd50": [0.1, 0.2]}}
        }))
        .unwrap();
        let before = nml.render();
        nml.update(json!({})).unwrap();
        assert_eq!(nml.render(), before);
    }

    #[test]
    fn test_failed_update_leaves_configuration_untouched() {
        let mut nml = Nml::build(json!({
            "param": {"core": {"dt": 150.0}, "opt": {"nws": 2, "wtiminc": 300.0}}
        }))
        .unwrap();
        let before = nml.clone();

        let err = nml.update(json!({"param": {"opt": {"wtiminc": 320.0}}})).unwrap_err();
        assert!(matches!(err, SchismError::Consistency(_)));
        assert_eq!(nml, before);

        let err = nml
            .update(json!({"param": {"core": {"dt": 100.0}, "opt": {"bogus": 1}}}))
            .unwrap_err();
        assert!(matches!(err, SchismError::Validation(_)));
        assert_eq!(nml, before);
    }

    #[test]
    fn test_update_creates_and_clears_sections() {
        let mut nml = Nml::build(json!({})).unwrap();
        nml.update(json!({"ice": {"ice_in": {"ievp": 2}}})).unwrap();
        assert_eq!(nml.ice().and_then(|ice| ice.ice_in.as_ref()).and_then(|i| i.ievp), Some(2));
        nml.update(json!({"ice": null})).unwrap();
        assert!(nml.ice().is_none());
    }

    #[test]
    fn test_update_times() {
        let mut nml = Nml::build(json!({"param": {"core": {"dt": 150.0}}})).unwrap();
        nml.update_times(&period()).unwrap();
        let param = nml.param().unwrap();
        assert_eq!(param.core.as_ref().unwrap().rnday, Some(0.5));
        let opt = param.opt.as_ref().unwrap();
        assert_eq!(
            (opt.start_year, opt.start_month, opt.start_day, opt.start_hour),
            (Some(2020), Some(2), Some(21), Some(4.0))
        );
        assert!(nml.wwminput().is_none());
    }

    #[test]
    fn test_update_times_stamps_wave_windows() {
        let mut nml = Nml::build(json!({"wwminput": {"proc": {"deltc": 600.0}}})).unwrap();
        nml.update_times(&period()).unwrap();
        let wwm = nml.wwminput().unwrap();
        let proc = wwm.proc.as_ref().unwrap();
        assert_eq!(proc.begtc.as_deref(), Some("20200221.040000"));
        assert_eq!(proc.endtc.as_deref(), Some("20200221.160000"));
        assert_eq!(proc.deltc, Some(600.0));
        let hotfile = wwm.hotfile.as_ref().unwrap();
        assert_eq!(hotfile.endtc.as_deref(), Some("20200221.160000"));
        assert!(wwm.engs.is_none());
    }

    #[test]
    fn test_wave_and_atmos_injection() {
        let mut nml = Nml::build(json!({
            "param": {"core": {"dt": 150.0}, "opt": {"wtiminc": 300.0}},
            "wwminput": {"bouc": {"lbcwa": true}}
        }))
        .unwrap();
        let wave = PathBuf::from("/prepared/wavebnd.nc");
        let atmos = PathBuf::from("/prepared/sflux");
        let sources = DataSources {
            wave: Some(&wave),
            atmos: Some(&atmos),
        };
        let advisories = nml.update_data_sources(&sources).unwrap();
        assert!(advisories.is_empty());
        let bouc = nml.wwminput().unwrap().bouc.as_ref().unwrap();
        assert_eq!(bouc.filewave.as_deref(), Some("wavebnd.nc"));
        assert_eq!(bouc.lbcwa, Some(true));
        assert_eq!(nml.param().unwrap().opt.as_ref().unwrap().nws, Some(2));
    }

    #[test]
    fn test_injection_advisories() {
        let mut nml = Nml::build(json!({
            "param": {"opt": {"nws": 0}},
            "wwminput": {"bouc": {"filewave": "user.nc"}}
        }))
        .unwrap();
        let wave = "wavebnd.nc".to_string();
        let atmos = "sflux".to_string();
        let advisories = nml
            .update_data_sources(&DataSources {
                wave: Some(&wave),
                atmos: Some(&atmos),
            })
            .unwrap();
        assert_eq!(advisories.len(), 2);

        let advisories = nml
            .update_data_sources(&DataSources {
                wave: Some(&wave),
                atmos: Some(&atmos),
            })
            .unwrap();
        assert!(advisories.is_empty());
    }

    #[test]
    fn test_wave_product_without_wave_model() {
        let mut nml = Nml::build(json!({"param": {}})).unwrap();
        let before = nml.clone();
        let wave = "wavebnd.nc".to_string();
        let advisories = nml
            .update_data_sources(&DataSources {
                wave: Some(&wave),
                atmos: None,
            })
            .unwrap();
        assert_eq!(advisories.len(), 1);
        assert_eq!(nml, before);
    }
}
