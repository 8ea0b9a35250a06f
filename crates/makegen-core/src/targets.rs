//! Target names for a dataset's build outputs.
//!
//! Every output of dataset `ds` lives under `target/groups/{ds}/`. The
//! directory target keeps its trailing slash so it doubles as a path prefix.

pub fn targetdir(ds: &str) -> String {
    format!("target/groups/{ds}/")
}

pub fn all_files(ds: &str) -> String {
    format!("all_{ds}")
}

pub fn all_ttl(ds: &str) -> String {
    format!("ttl_all_{ds}")
}

pub fn src_gaf_zip(ds: &str) -> String {
    format!("{}{ds}-src.gaf.gz", targetdir(ds))
}

pub fn filtered_gaf(ds: &str) -> String {
    format!("{}{ds}.gaf", targetdir(ds))
}

pub fn filtered_gpad(ds: &str) -> String {
    format!("{}{ds}.gpad", targetdir(ds))
}

pub fn gpi(ds: &str) -> String {
    format!("{}{ds}.gpi", targetdir(ds))
}

pub fn noiea_gpad(ds: &str) -> String {
    format!("{}{ds}_noiea.gpad", targetdir(ds))
}

pub fn noiea_gpi(ds: &str) -> String {
    format!("{}{ds}_noiea.gpi", targetdir(ds))
}

pub fn owltools_gafcheck(ds: &str) -> String {
    format!("{}{ds}-owltools-check.txt", targetdir(ds))
}

pub fn noiea_gafcheck(ds: &str) -> String {
    format!("{}{ds}_noiea-owltools-check.txt", targetdir(ds))
}

pub fn ttl(ds: &str) -> String {
    format!("{}{ds}_cam.ttl", targetdir(ds))
}

pub fn noiea_ttl(ds: &str) -> String {
    format!("{}{ds}_noiea_cam.ttl", targetdir(ds))
}

pub fn gzip(path: &str) -> String {
    format!("{path}.gz")
}

/// Shell recipe fetching `url` into the rule's own target.
///
/// Downloads go to `$@.tmp` first so an interrupted transfer never leaves a
/// target Make would consider up to date.
pub fn download_recipe(url: &str) -> String {
    format!(
        "wget --retry-connrefused --waitretry=10 -t 10 --no-check-certificate {url} -O $@.tmp && mv $@.tmp $@ && touch $@"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_share_the_target_directory() {
        assert_eq!(targetdir("sgd"), "target/groups/sgd/");
        assert_eq!(src_gaf_zip("sgd"), "target/groups/sgd/sgd-src.gaf.gz");
        assert_eq!(gzip(&filtered_gaf("sgd")), "target/groups/sgd/sgd.gaf.gz");
        assert_eq!(gzip(&filtered_gpad("sgd")), "target/groups/sgd/sgd.gpad.gz");
        assert_eq!(gzip(&gpi("sgd")), "target/groups/sgd/sgd.gpi.gz");
        assert_eq!(
            owltools_gafcheck("sgd"),
            "target/groups/sgd/sgd-owltools-check.txt"
        );
        assert_eq!(ttl("sgd"), "target/groups/sgd/sgd_cam.ttl");
    }

    #[test]
    fn noiea_variants() {
        let ds = "goa_uniprot_all";
        assert_eq!(
            gzip(&noiea_gpad(ds)),
            "target/groups/goa_uniprot_all/goa_uniprot_all_noiea.gpad.gz"
        );
        assert_eq!(
            gzip(&noiea_gpi(ds)),
            "target/groups/goa_uniprot_all/goa_uniprot_all_noiea.gpi.gz"
        );
        assert_eq!(
            noiea_gafcheck(ds),
            "target/groups/goa_uniprot_all/goa_uniprot_all_noiea-owltools-check.txt"
        );
        assert_eq!(
            noiea_ttl(ds),
            "target/groups/goa_uniprot_all/goa_uniprot_all_noiea_cam.ttl"
        );
    }

    #[test]
    fn aggregate_names() {
        assert_eq!(all_files("mgi"), "all_mgi");
        assert_eq!(all_ttl("mgi"), "ttl_all_mgi");
    }

    #[test]
    fn download_recipe_renames_atomically() {
        let recipe = download_recipe("http://x/sgd.gaf.gz");
        assert!(recipe.starts_with("wget --retry-connrefused --waitretry=10 -t 10"));
        assert!(recipe.contains("http://x/sgd.gaf.gz -O $@.tmp"));
        assert!(recipe.ends_with("&& mv $@.tmp $@ && touch $@"));
    }
}
