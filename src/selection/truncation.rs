use crate::error::{GeneticError, Result};
use crate::genome::Genome;

/// Elitist truncation selection.
///
/// Returns the first `parent_pool_size` genomes of a generation that is already sorted
/// ascending by fitness. No randomness is involved: the same generation always yields the
/// same parents.
///
/// # Errors
///
/// Returns an error if:
/// - The generation is empty
/// - `parent_pool_size` is zero
/// - The generation holds fewer than `parent_pool_size` genomes
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use pixelgen::color::{Palette, Rgb};
/// use pixelgen::genome::Genome;
/// use pixelgen::grid::PixelGrid;
/// use pixelgen::rng::RandomNumberGenerator;
/// use pixelgen::selection::select_parents;
///
/// let target = Arc::new(PixelGrid::filled(2, 2, Rgb::RED).unwrap());
/// let mut rng = RandomNumberGenerator::from_seed(0);
/// let mut generation: Vec<Genome> = (0..4)
///     .map(|_| Genome::random(&target, &Palette::default(), &mut rng))
///     .collect();
/// generation.sort_by(|a, b| a.fitness().total_cmp(&b.fitness()));
///
/// let parents = select_parents(&generation, 2).unwrap();
/// assert_eq!(parents.len(), 2);
/// ```
pub fn select_parents(generation: &[Genome], parent_pool_size: usize) -> Result<&[Genome]> {
    if generation.is_empty() {
        return Err(GeneticError::EmptyPopulation);
    }

    if parent_pool_size == 0 {
        return Err(GeneticError::Selection(
            "Parent pool size cannot be zero".to_string(),
        ));
    }

    if generation.len() < parent_pool_size {
        return Err(GeneticError::Selection(format!(
            "Generation of {} genomes cannot supply {} parents",
            generation.len(),
            parent_pool_size
        )));
    }

    debug_assert!(
        generation
            .windows(2)
            .all(|pair| pair[0].fitness() <= pair[1].fitness()),
        "generation must be sorted ascending by fitness"
    );

    Ok(&generation[..parent_pool_size])
}
