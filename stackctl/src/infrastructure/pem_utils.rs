//! Convenience functions for dealing with PEM files.

use std::path::Path;

use rustls::{Certificate, RootCertStore};

use crate::StackCtlError;

/// Returns all certificates in the pemfile at the given path
pub fn read_certificates(path: impl AsRef<Path>) -> Result<Vec<Certificate>, StackCtlError> {
    let fd = std::fs::File::open(path.as_ref())?;
    let mut buf = std::io::BufReader::new(&fd);
    let certs = rustls_pemfile::certs(&mut buf)?
        .into_iter()
        .map(Certificate)
        .collect();

    Ok(certs)
}

/// Builds a root store holding every certificate of the chain at `path`.
pub fn read_root_store(path: impl AsRef<Path>) -> Result<RootCertStore, StackCtlError> {
    let certs = read_certificates(&path)?;
    if certs.is_empty() {
        return Err(StackCtlError::NoCertificates(
            path.as_ref().display().to_string(),
        ));
    }

    let mut root_store = RootCertStore::empty();
    for cert in certs {
        root_store.add(&cert)?;
    }
    Ok(root_store)
}
