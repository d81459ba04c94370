/// Date directory naming used by the snapshot tree: "2025-01-15"
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// Time-slot directory naming used by the snapshot tree: "14-00-00"
pub(crate) const TIME_SLOT_FORMAT: &str = "%H-%M-%S";

/// Extension of MSB definition files
pub(crate) const DEFINITION_EXT: &str = "xml";

/// Extension of the optional metadata sidecar next to each definition
pub(crate) const SIDECAR_EXT: &str = "info";

/// Default translator executable (MSB definition to queue manifest)
pub(crate) const TRANSLATOR_PROGRAM: &str = "jcmttranslator";

/// Default queue-submission executable
pub(crate) const QUEUE_PROGRAM: &str = "ditscmd";

/// Task and action passed to the queue tool to append an observation
pub(crate) const QUEUE_TASK: &str = "OCSQUEUE";
pub(crate) const QUEUE_ACTION: &str = "ADDBACK";
