//! Hash-preimage oracle.

use crate::error::{Result, SearchError};
use crate::search::{Verdict, Verifier};
use sha2::{Digest, Sha256};

/// Supported digest functions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DigestAlgorithm {
    #[default]
    Sha256,
    Sha1,
    Md5,
}

impl DigestAlgorithm {
    pub fn digest(&self, input: &[u8]) -> Vec<u8> {
        match self {
            DigestAlgorithm::Sha256 => Sha256::digest(input).to_vec(),
            DigestAlgorithm::Sha1 => sha1::Sha1::digest(input).to_vec(),
            DigestAlgorithm::Md5 => md5::compute(input).0.to_vec(),
        }
    }

    /// Digest size in bytes
    pub fn output_len(&self) -> usize {
        match self {
            DigestAlgorithm::Sha256 => 32,
            DigestAlgorithm::Sha1 => 20,
            DigestAlgorithm::Md5 => 16,
        }
    }
}

impl std::fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DigestAlgorithm::Sha256 => write!(f, "sha256"),
            DigestAlgorithm::Sha1 => write!(f, "sha1"),
            DigestAlgorithm::Md5 => write!(f, "md5"),
        }
    }
}

impl std::str::FromStr for DigestAlgorithm {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "").as_str() {
            "sha256" => Ok(DigestAlgorithm::Sha256),
            "sha1" => Ok(DigestAlgorithm::Sha1),
            "md5" => Ok(DigestAlgorithm::Md5),
            _ => Err(format!(
                "Unknown digest: '{}'. Valid options: sha256, sha1, md5",
                s
            )),
        }
    }
}

/// Accepts the candidate whose digest equals a known target.
#[derive(Debug, Clone)]
pub struct DigestVerifier {
    algorithm: DigestAlgorithm,
    target: Vec<u8>,
}

impl DigestVerifier {
    /// Build from a hex-encoded target digest (case-insensitive).
    pub fn from_hex(algorithm: DigestAlgorithm, target_hex: &str) -> Result<Self> {
        let target = hex::decode(target_hex.trim()).map_err(|e| {
            SearchError::InvalidConfig(format!("{} target is not valid hex: {}", algorithm, e))
        })?;

        if target.len() != algorithm.output_len() {
            return Err(SearchError::InvalidConfig(format!(
                "{} target must be {} bytes, got {}",
                algorithm,
                algorithm.output_len(),
                target.len()
            )));
        }

        Ok(Self { algorithm, target })
    }

    pub fn algorithm(&self) -> DigestAlgorithm {
        self.algorithm
    }
}

impl Verifier for DigestVerifier {
    fn verify(&self, candidate: &str) -> Verdict {
        if self.algorithm.digest(candidate.as_bytes()) == self.target {
            Verdict::Accepted
        } else {
            Verdict::Rejected
        }
    }
}
