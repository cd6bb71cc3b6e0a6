use crate::pipeline::HostIpTable;
use eyre::{
    Context as _,
    Result,
};
use std::{
    fs::File,
    io,
    path::Path,
};

/// Writes the `name,ip` report. One row per resolved hostname, rows in table
/// order (ascending by hostname).
pub fn write_report<W: io::Write>(hosts: &HostIpTable, out: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);

    writer.write_record(["name", "ip"]).context("writing csv header")?;

    for (host, ip) in hosts {
        writer
            .write_record([host.as_str(), ip.as_str()])
            .with_context(|| format!("writing csv row for {host:?}"))?;
    }

    writer.flush().context("flushing csv output")?;

    Ok(())
}

pub fn write_report_file(hosts: &HostIpTable, path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating report file {}", path.display()))?;
    write_report(hosts, file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_table_writes_only_the_header() {
        let mut out = Vec::new();
        write_report(&HostIpTable::new(), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "name,ip\n");
    }

    #[test]
    fn rows_come_out_sorted_by_hostname() {
        let hosts = HostIpTable::from([
            ("b.example.com".to_string(), "10.0.0.2".to_string()),
            ("a.example.com".to_string(), "10.0.0.1".to_string()),
        ]);

        let mut out = Vec::new();
        write_report(&hosts, &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "name,ip\na.example.com,10.0.0.1\nb.example.com,10.0.0.2\n"
        );
    }

    #[test]
    fn report_file_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("IngressRoutes-DNS-IP.csv");

        let hosts = HostIpTable::from([("a.example.com".to_string(), "10.0.0.1".to_string())]);
        write_report_file(&hosts, &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "name,ip\na.example.com,10.0.0.1\n");
    }
}
