mod attestation;
