/// Read-only help tab. No data flow to or from the parameter store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HelpTopic {
    pub key: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

#[derive(Debug, Clone, Default)]
pub struct HelpPanel;

const TOPICS: &[HelpTopic] = &[
    HelpTopic {
        key: "input_directory",
        title: "Input directory",
        body: "Directory holding the segmented input frames.",
    },
    HelpTopic {
        key: "filename_pattern",
        title: "Filename pattern",
        body: "Frame filename template. The braced run of i characters is \
               replaced by the zero-padded frame index, e.g. img_{iii}.tif \
               matches img_000.tif through img_999.tif.",
    },
    HelpTopic {
        key: "output_directory",
        title: "Output directory",
        body: "Directory where lineage and tracking outputs are written.",
    },
    HelpTopic {
        key: "output_prefix",
        title: "Output prefix",
        body: "Prefix prepended to every generated output file.",
    },
    HelpTopic {
        key: "weight_cell_overlap",
        title: "Weight cell overlap",
        body: "Cost-function weight for the overlap term between a cell and \
               its candidate match in the next frame. 0 to 1.",
    },
    HelpTopic {
        key: "weight_centroids",
        title: "Weight centroids",
        body: "Cost-function weight for the centroid distance term. 0 to 1.",
    },
    HelpTopic {
        key: "weight_cell_size",
        title: "Weight cell size",
        body: "Cost-function weight for the size difference term. 0 to 1.",
    },
    HelpTopic {
        key: "max_centroid_distance",
        title: "Max centroid distance",
        body: "Maximum distance in pixels a centroid may move between \
               consecutive frames and still be considered the same cell.",
    },
    HelpTopic {
        key: "enable_cell_division",
        title: "Enable cell division",
        body: "Detect mitotic events and record mother/daughter links in \
               the lineage.",
    },
    HelpTopic {
        key: "enable_cell_fusion",
        title: "Enable cell fusion",
        body: "Allow two tracked cells to merge into one object.",
    },
    HelpTopic {
        key: "min_cell_life",
        title: "Min cell life",
        body: "Tracks shorter than this many frames are discarded as noise.",
    },
    HelpTopic {
        key: "cell_death_delta_threshold",
        title: "Cell death delta threshold",
        body: "Centroid displacement below which a disappearing cell is \
               considered dead rather than lost.",
    },
    HelpTopic {
        key: "cell_density_affects_ci",
        title: "Cell density affects CI",
        body: "Lower the confidence index of cells in crowded regions.",
    },
    HelpTopic {
        key: "border_cell_affects_ci",
        title: "Border cell affects CI",
        body: "Lower the confidence index of cells touching the image border.",
    },
    HelpTopic {
        key: "daughter_size_similarity",
        title: "Daughter size similarity",
        body: "How similar in size two daughter cells must be for a division \
               to be accepted. 0 disables the check, 1 requires equal sizes.",
    },
    HelpTopic {
        key: "daughter_aspect_ratio_similarity",
        title: "Daughter aspect ratio similarity",
        body: "How similar in aspect ratio two daughter cells must be for a \
               division to be accepted. 0 to 1.",
    },
    HelpTopic {
        key: "mother_circularity_threshold",
        title: "Mother circularity threshold",
        body: "Minimum circularity a mother cell must reach before division; \
               rounding up is a mitosis cue. 0 to 1.",
    },
    HelpTopic {
        key: "num_frames_check_circularity",
        title: "Frames to check circularity",
        body: "How many frames before a candidate division to inspect for \
               the mother circularity cue.",
    },
    HelpTopic {
        key: "division_overlap_threshold",
        title: "Division overlap threshold",
        body: "Minimum overlap between mother and daughters for a division \
               to be accepted. 0 to 1.",
    },
    HelpTopic {
        key: "fusion_overlap_threshold",
        title: "Fusion overlap threshold",
        body: "Minimum overlap between merging cells for a fusion to be \
               accepted. 0 to 1.",
    },
    HelpTopic {
        key: "min_division_cell_life",
        title: "Min division cell life",
        body: "Minimum number of frames a cell must exist before it is \
               allowed to divide.",
    },
];

impl HelpPanel {
    pub fn new() -> Self {
        Self
    }

    pub fn title(&self) -> &'static str {
        "Help"
    }

    pub fn topics(&self) -> &'static [HelpTopic] {
        TOPICS
    }

    pub fn topic(&self, key: &str) -> Option<&'static HelpTopic> {
        TOPICS.iter().find(|topic| topic.key == key)
    }
}
