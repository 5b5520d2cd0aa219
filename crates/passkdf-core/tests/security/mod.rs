mod redaction;
