use super::instance::InstanceBatch;
use super::traits::RenderBackend;
use crate::field::PlacementField;

/// Uploads cached placement fields to a backend, once per field generation.
#[derive(Debug, Default)]
pub struct PlacementRenderer {
    /// (field code, generation) pairs already uploaded.
    uploaded: Vec<(u32, u32)>,
}

impl PlacementRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write `field` in one batch and mark it dirty. Skips the upload when this
    /// generation of the field was already written. Returns whether it wrote.
    pub fn sync(&mut self, field: &PlacementField, backend: &mut dyn RenderBackend) -> bool {
        let code = field.kind().code();
        let generation = field.generation();
        match self.uploaded.iter_mut().find(|(c, _)| *c == code) {
            Some((_, seen)) if *seen == generation => return false,
            Some((_, seen)) => *seen = generation,
            None => self.uploaded.push((code, generation)),
        }

        let batch = InstanceBatch::from_placements(field.placements());
        backend.write_instances(field.kind(), &batch.instances);
        backend.mark_instances_dirty(field.kind());
        log::debug!(
            "renderer: uploaded {} {:?} instances (generation {})",
            batch.len(),
            field.kind(),
            generation
        );
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{FieldKind, FieldSpec};
    use crate::renderer::recording::{Call, RecordingBackend};

    #[test]
    fn writes_once_then_marks_dirty() {
        let field = PlacementField::generate(FieldKind::Stars, FieldSpec::stars());
        let mut renderer = PlacementRenderer::new();
        let mut backend = RecordingBackend::default();

        assert!(renderer.sync(&field, &mut backend));
        assert_eq!(
            backend.calls,
            vec![
                Call::WriteInstances(FieldKind::Stars, 2000),
                Call::MarkDirty(FieldKind::Stars),
            ]
        );
        assert_eq!(backend.instances[&FieldKind::Stars].len(), 2000);
    }

    #[test]
    fn same_generation_is_skipped() {
        let field = PlacementField::generate(FieldKind::Debris, FieldSpec::debris());
        let mut renderer = PlacementRenderer::new();
        let mut backend = RecordingBackend::default();
        renderer.sync(&field, &mut backend);
        assert!(!renderer.sync(&field, &mut backend));
        assert_eq!(backend.calls.len(), 2);
    }

    #[test]
    fn new_generation_is_uploaded() {
        let mut field = PlacementField::generate(FieldKind::Debris, FieldSpec::debris());
        let mut renderer = PlacementRenderer::new();
        let mut backend = RecordingBackend::default();
        renderer.sync(&field, &mut backend);

        let mut spec = FieldSpec::debris();
        spec.count = 100;
        field.regenerate(spec);
        assert!(renderer.sync(&field, &mut backend));
        assert_eq!(backend.instances[&FieldKind::Debris].len(), 100);
    }

    #[test]
    fn fields_are_tracked_separately() {
        let stars = PlacementField::generate(FieldKind::Stars, FieldSpec::stars());
        let debris = PlacementField::generate(FieldKind::Debris, FieldSpec::debris());
        let mut renderer = PlacementRenderer::new();
        let mut backend = RecordingBackend::default();
        assert!(renderer.sync(&stars, &mut backend));
        assert!(renderer.sync(&debris, &mut backend));
        assert_eq!(backend.calls.len(), 4);
    }

    #[test]
    fn uploaded_data_matches_placements() {
        let field = PlacementField::generate(FieldKind::Stars, FieldSpec::stars());
        let mut renderer = PlacementRenderer::new();
        let mut backend = RecordingBackend::default();
        renderer.sync(&field, &mut backend);
        let first = backend.instances[&FieldKind::Stars][0];
        assert_eq!(first.position(), field.placements()[0].position);
        assert_eq!(first.brightness, field.placements()[0].brightness);
    }
}
